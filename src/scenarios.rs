use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{Instrument, info, info_span, warn};

use crate::client::ItemApi;
use crate::config::Config;
use crate::errors::{ClientError, ScenarioError, UnknownScenario};

mod checks;
mod create;
mod item_info;
mod seller;
mod statistics;

/// One end-to-end check against the listing service
///
/// Scenarios are independent: each creates whatever it needs, calls the
/// operation under test and asserts on the outcome. The only thing they share
/// is the seller id items are created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    CreateItem,
    CreateItemWithoutRequiredField,
    CreateItemUnexpectedFieldType,
    CreateItemNegativeSellerId,
    CreateItemNegativePrice,
    CreateTwoDistinctItems,
    GetItemInfo,
    GetItemInfoCheckId,
    GetItemInfoCheckName,
    GetItemInfoCheckPrice,
    GetItemInfoCheckSellerId,
    GetItemInfoCheckCreatedAt,
    GetItemInfoCheckStatistics,
    GetItemInfoEmptyId,
    GetItemInfoUnknownId,
    GetItemInfoMalformedId,
    GetItemStatistics,
    GetItemStatisticsEmptyId,
    GetItemStatisticsUnknownId,
    GetItemStatisticsMalformedId,
    GetSellerItems,
    GetSellerItemsCheckName,
    GetSellerItemsCheckId,
    GetSellerItemsCheckPrice,
    GetSellerItemsCheckStatistics,
    GetSellerItemsCheckCreatedAt,
}

/// Whether a scenario runs by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioStatus {
    Enabled,
    /// Kept in the catalogue but skipped, because the live service is known
    /// to disagree or the expected behavior is not specified anywhere
    Disabled { reason: &'static str },
}

const REASON_MISSING_FIELD_ACCEPTED: &str =
    "service bug: answers 200 when a required field is missing";
const REASON_NEGATIVE_SELLER_ID: &str =
    "gray zone: unspecified whether a negative sellerID is valid";
const REASON_NEGATIVE_PRICE: &str = "gray zone: unspecified whether a negative price is valid";
const REASON_NAME_CHANGED: &str = "service bug: returned name differs from the submitted one";
const REASON_MALFORMED_ID: &str = "gray zone: no documented status for an id that is not a UUID";
const REASON_STATISTICS_NOT_FOUND: &str =
    "service bug: statistics endpoint does not find items by id";
const REASON_SELLER_LIST_ID: &str = "service bug: listed id differs from the created one";

impl Scenario {
    /// Every scenario, in catalogue order
    pub const ALL: [Scenario; 26] = [
        Scenario::CreateItem,
        Scenario::CreateItemWithoutRequiredField,
        Scenario::CreateItemUnexpectedFieldType,
        Scenario::CreateItemNegativeSellerId,
        Scenario::CreateItemNegativePrice,
        Scenario::CreateTwoDistinctItems,
        Scenario::GetItemInfo,
        Scenario::GetItemInfoCheckId,
        Scenario::GetItemInfoCheckName,
        Scenario::GetItemInfoCheckPrice,
        Scenario::GetItemInfoCheckSellerId,
        Scenario::GetItemInfoCheckCreatedAt,
        Scenario::GetItemInfoCheckStatistics,
        Scenario::GetItemInfoEmptyId,
        Scenario::GetItemInfoUnknownId,
        Scenario::GetItemInfoMalformedId,
        Scenario::GetItemStatistics,
        Scenario::GetItemStatisticsEmptyId,
        Scenario::GetItemStatisticsUnknownId,
        Scenario::GetItemStatisticsMalformedId,
        Scenario::GetSellerItems,
        Scenario::GetSellerItemsCheckName,
        Scenario::GetSellerItemsCheckId,
        Scenario::GetSellerItemsCheckPrice,
        Scenario::GetSellerItemsCheckStatistics,
        Scenario::GetSellerItemsCheckCreatedAt,
    ];

    /// Stable snake_case name, used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            Scenario::CreateItem => "create_item",
            Scenario::CreateItemWithoutRequiredField => "create_item_without_required_field",
            Scenario::CreateItemUnexpectedFieldType => "create_item_unexpected_field_type",
            Scenario::CreateItemNegativeSellerId => "create_item_negative_seller_id",
            Scenario::CreateItemNegativePrice => "create_item_negative_price",
            Scenario::CreateTwoDistinctItems => "create_two_distinct_items",
            Scenario::GetItemInfo => "get_item_info",
            Scenario::GetItemInfoCheckId => "get_item_info_check_id",
            Scenario::GetItemInfoCheckName => "get_item_info_check_name",
            Scenario::GetItemInfoCheckPrice => "get_item_info_check_price",
            Scenario::GetItemInfoCheckSellerId => "get_item_info_check_seller_id",
            Scenario::GetItemInfoCheckCreatedAt => "get_item_info_check_created_at",
            Scenario::GetItemInfoCheckStatistics => "get_item_info_check_statistics",
            Scenario::GetItemInfoEmptyId => "get_item_info_empty_id",
            Scenario::GetItemInfoUnknownId => "get_item_info_unknown_id",
            Scenario::GetItemInfoMalformedId => "get_item_info_malformed_id",
            Scenario::GetItemStatistics => "get_item_statistics",
            Scenario::GetItemStatisticsEmptyId => "get_item_statistics_empty_id",
            Scenario::GetItemStatisticsUnknownId => "get_item_statistics_unknown_id",
            Scenario::GetItemStatisticsMalformedId => "get_item_statistics_malformed_id",
            Scenario::GetSellerItems => "get_seller_items",
            Scenario::GetSellerItemsCheckName => "get_seller_items_check_name",
            Scenario::GetSellerItemsCheckId => "get_seller_items_check_id",
            Scenario::GetSellerItemsCheckPrice => "get_seller_items_check_price",
            Scenario::GetSellerItemsCheckStatistics => "get_seller_items_check_statistics",
            Scenario::GetSellerItemsCheckCreatedAt => "get_seller_items_check_created_at",
        }
    }

    /// One line on what the scenario asserts
    pub fn description(self) -> &'static str {
        match self {
            Scenario::CreateItem => "creating an item answers 200 with a status message",
            Scenario::CreateItemWithoutRequiredField => {
                "omitting sellerID, name or price is rejected with 400"
            }
            Scenario::CreateItemUnexpectedFieldType => {
                "a string sellerID, numeric name or string price is rejected with 400"
            }
            Scenario::CreateItemNegativeSellerId => "a negative sellerID is rejected with 400",
            Scenario::CreateItemNegativePrice => "a negative price is rejected with 400",
            Scenario::CreateTwoDistinctItems => "two identical creations get distinct ids",
            Scenario::GetItemInfo => "a created item can be read back",
            Scenario::GetItemInfoCheckId => "reading back returns the created id",
            Scenario::GetItemInfoCheckName => "reading back returns the submitted name",
            Scenario::GetItemInfoCheckPrice => "reading back returns the submitted price",
            Scenario::GetItemInfoCheckSellerId => "reading back returns the submitted sellerID",
            Scenario::GetItemInfoCheckCreatedAt => "createdAt, when present, is today",
            Scenario::GetItemInfoCheckStatistics => {
                "statistics, when present, hold integer counters"
            }
            Scenario::GetItemInfoEmptyId => "reading an empty id answers 404",
            Scenario::GetItemInfoUnknownId => "reading a perturbed id answers 404",
            Scenario::GetItemInfoMalformedId => "reading a non-UUID id answers 400",
            Scenario::GetItemStatistics => "statistics of a created item can be read",
            Scenario::GetItemStatisticsEmptyId => "statistics of an empty id answer 404",
            Scenario::GetItemStatisticsUnknownId => {
                "looking up a perturbed id through the item endpoint answers 404"
            }
            Scenario::GetItemStatisticsMalformedId => {
                "looking up `some_uuid` through the item endpoint answers 400"
            }
            Scenario::GetSellerItems => "a seller with a created item lists at least one item",
            Scenario::GetSellerItemsCheckName => "the newest listed item has the submitted name",
            Scenario::GetSellerItemsCheckId => "the newest listed item has the created id",
            Scenario::GetSellerItemsCheckPrice => "the newest listed item has the submitted price",
            Scenario::GetSellerItemsCheckStatistics => {
                "the newest listed item's statistics hold integer counters"
            }
            Scenario::GetSellerItemsCheckCreatedAt => "the newest listed item was created today",
        }
    }

    /// Whether the scenario runs by default, and if not, why
    pub fn status(self) -> ScenarioStatus {
        let reason = match self {
            Scenario::CreateItemWithoutRequiredField => REASON_MISSING_FIELD_ACCEPTED,
            Scenario::CreateItemNegativeSellerId => REASON_NEGATIVE_SELLER_ID,
            Scenario::CreateItemNegativePrice => REASON_NEGATIVE_PRICE,
            Scenario::GetItemInfoCheckName | Scenario::GetSellerItemsCheckName => {
                REASON_NAME_CHANGED
            }
            Scenario::GetItemInfoMalformedId | Scenario::GetItemStatisticsMalformedId => {
                REASON_MALFORMED_ID
            }
            Scenario::GetItemStatistics => REASON_STATISTICS_NOT_FOUND,
            Scenario::GetSellerItemsCheckId => REASON_SELLER_LIST_ID,
            _ => return ScenarioStatus::Enabled,
        };
        ScenarioStatus::Disabled { reason }
    }

    pub fn is_enabled(self) -> bool {
        self.status() == ScenarioStatus::Enabled
    }

    /// Looks a scenario up by its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scenario| scenario.name() == name)
    }

    async fn execute(self, api: &ItemApi, seller_id: i64) -> Result<(), ScenarioError> {
        match self {
            Scenario::CreateItem => create::create_item(api, seller_id).await,
            Scenario::CreateItemWithoutRequiredField => {
                create::create_item_without_required_field(api, seller_id).await
            }
            Scenario::CreateItemUnexpectedFieldType => {
                create::create_item_unexpected_field_type(api, seller_id).await
            }
            Scenario::CreateItemNegativeSellerId => {
                create::create_item_negative_seller_id(api, seller_id).await
            }
            Scenario::CreateItemNegativePrice => {
                create::create_item_negative_price(api, seller_id).await
            }
            Scenario::CreateTwoDistinctItems => {
                create::create_two_distinct_items(api, seller_id).await
            }
            Scenario::GetItemInfo => item_info::get_item_info(api, seller_id).await,
            Scenario::GetItemInfoCheckId => item_info::check_id(api, seller_id).await,
            Scenario::GetItemInfoCheckName => item_info::check_name(api, seller_id).await,
            Scenario::GetItemInfoCheckPrice => item_info::check_price(api, seller_id).await,
            Scenario::GetItemInfoCheckSellerId => item_info::check_seller_id(api, seller_id).await,
            Scenario::GetItemInfoCheckCreatedAt => {
                item_info::check_created_at(api, seller_id).await
            }
            Scenario::GetItemInfoCheckStatistics => {
                item_info::check_statistics(api, seller_id).await
            }
            Scenario::GetItemInfoEmptyId => item_info::empty_id(api).await,
            Scenario::GetItemInfoUnknownId => item_info::unknown_id(api, seller_id).await,
            Scenario::GetItemInfoMalformedId => item_info::malformed_id(api).await,
            Scenario::GetItemStatistics => statistics::get_item_statistics(api, seller_id).await,
            Scenario::GetItemStatisticsEmptyId => statistics::empty_id(api, seller_id).await,
            Scenario::GetItemStatisticsUnknownId => statistics::unknown_id(api, seller_id).await,
            Scenario::GetItemStatisticsMalformedId => statistics::malformed_id(api).await,
            Scenario::GetSellerItems => seller::get_seller_items(api, seller_id).await,
            Scenario::GetSellerItemsCheckName => seller::check_name(api, seller_id).await,
            Scenario::GetSellerItemsCheckId => seller::check_id(api, seller_id).await,
            Scenario::GetSellerItemsCheckPrice => seller::check_price(api, seller_id).await,
            Scenario::GetSellerItemsCheckStatistics => {
                seller::check_statistics(api, seller_id).await
            }
            Scenario::GetSellerItemsCheckCreatedAt => {
                seller::check_created_at(api, seller_id).await
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

impl Serialize for Scenario {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Which scenarios a run covers
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Scenarios to run; empty means the whole catalogue
    pub only: Vec<Scenario>,
    /// Also run disabled scenarios instead of skipping them
    pub include_disabled: bool,
}

impl Selection {
    /// Every scenario, disabled ones skipped
    pub fn all() -> Self {
        Self::default()
    }

    /// The scenarios covered, in order and without repeats
    pub fn scenarios(&self) -> Vec<Scenario> {
        if self.only.is_empty() {
            return Scenario::ALL.to_vec();
        }

        let mut picked = Vec::with_capacity(self.only.len());
        for &scenario in &self.only {
            if !picked.contains(&scenario) {
                picked.push(scenario);
            }
        }
        picked
    }

    /// Why `scenario` is skipped in this selection, if it is
    ///
    /// Naming a disabled scenario is not enough to run it;
    /// `include_disabled` has to be set as well.
    pub fn skip_reason(&self, scenario: Scenario) -> Option<&'static str> {
        match scenario.status() {
            ScenarioStatus::Disabled { reason } if !self.include_disabled => Some(reason),
            _ => None,
        }
    }
}

/// How a scenario ended
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(ScenarioError),
    Skipped { reason: &'static str },
}

/// Result of one scenario in a run
#[derive(Debug)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub outcome: Outcome,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }
}

/// Counts of a run's outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn of(reports: &[ScenarioReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            match report.outcome {
                Outcome::Passed => summary.passed += 1,
                Outcome::Failed(_) => summary.failed += 1,
                Outcome::Skipped { .. } => summary.skipped += 1,
            }
            summary
        })
    }
}

/// Runs scenarios one after another against a single service
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    api: ItemApi,
    seller_id: i64,
}

impl ScenarioRunner {
    pub fn new(api: ItemApi, seller_id: i64) -> Self {
        Self { api, seller_id }
    }

    /// Builds a runner for the configured service and seller
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Ok(Self::new(ItemApi::new(&config.base_url)?, config.seller_id))
    }

    pub fn api(&self) -> &ItemApi {
        &self.api
    }

    pub fn seller_id(&self) -> i64 {
        self.seller_id
    }

    /// Runs one scenario, regardless of its status
    pub async fn run(&self, scenario: Scenario) -> Result<(), ScenarioError> {
        scenario
            .execute(&self.api, self.seller_id)
            .instrument(info_span!("scenario", name = scenario.name()))
            .await
    }

    /// Runs a selection sequentially and reports every scenario in it
    pub async fn run_selection(&self, selection: &Selection) -> Vec<ScenarioReport> {
        let mut reports = Vec::new();

        for scenario in selection.scenarios() {
            let outcome = match selection.skip_reason(scenario) {
                Some(reason) => {
                    info!(scenario = scenario.name(), reason, "Skipped");
                    Outcome::Skipped { reason }
                }
                None => match self.run(scenario).await {
                    Ok(()) => {
                        info!(scenario = scenario.name(), "Passed");
                        Outcome::Passed
                    }
                    Err(e) => {
                        warn!(scenario = scenario.name(), error = %e, "Failed");
                        Outcome::Failed(e)
                    }
                },
            };
            reports.push(ScenarioReport { scenario, outcome });
        }

        reports
    }
}
