//! # Application State Types
//!
//! All state-related types for the application: screens, per-resource
//! explorer state, in-flight fetch tracking, and the derived dashboard model.

use crate::services::api::ApiClient;
use shared::{
    Armor, AvgWeaponStats, Boss, BuildType, ClassDef, NameFilter, Page, PageRequest,
    TopDamageEntry, Weapon, WeaponStatistics, UNCLASSIFIED_TIER,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Summary dashboard with counts and charts
    Dashboard,
    /// Weapon explorer with filter and pagination
    Weapons,
    /// Armor explorer with filter and pagination
    Armors,
    /// Boss explorer with filter and pagination
    Bosses,
    /// Starting class explorer
    Classes,
}

impl Screen {
    /// Get all screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Weapons,
            Screen::Armors,
            Screen::Bosses,
            Screen::Classes,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Weapons => "Weapons",
            Screen::Armors => "Armors",
            Screen::Bosses => "Bosses",
            Screen::Classes => "Classes",
        }
    }
}

/// One in-flight fetch target with a monotonic sequence guard.
///
/// Every fetch bumps the sequence and carries it through the async task;
/// a response only lands if its sequence still matches. This discards
/// out-of-order responses when the user changes page or filter while an
/// older request is still running.
///
/// A failed fetch keeps the previously loaded data and records the error
/// alongside it, so the UI can show stale data with an error banner rather
/// than going blank.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    /// Start a new fetch: bump the sequence, mark loading, clear the error.
    /// Returns the sequence the async task must send back with its result.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        self.seq
    }

    /// Land a fetch result. Returns `false` (and changes nothing) when the
    /// sequence is stale, i.e. a newer fetch was started in the meantime.
    pub fn resolve(&mut self, seq: u64, result: Result<T, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        true
    }
}

/// State for one list explorer screen (weapons, armors, bosses, classes).
///
/// `filter_input` is the live text box contents; `filter` is the committed
/// filter that requests are actually built from. Committing a filter always
/// resets pagination to the first page.
#[derive(Debug, Clone)]
pub struct ExplorerState<T> {
    pub filter_input: String,
    pub filter: NameFilter,
    pub page: PageRequest,
    pub slot: FetchSlot<Page<T>>,
}

// Manual impl: the derive would demand `T: Default` even though no `T`
// value is ever constructed here.
impl<T> Default for ExplorerState<T> {
    fn default() -> Self {
        Self {
            filter_input: String::new(),
            filter: NameFilter::default(),
            page: PageRequest::default(),
            slot: FetchSlot::default(),
        }
    }
}

impl<T> ExplorerState<T> {
    /// Commit the typed filter text and reset to the first page.
    /// A blank or whitespace-only input clears the filter.
    pub fn apply_filter(&mut self) {
        let trimmed = self.filter_input.trim();
        self.filter = if trimmed.is_empty() {
            NameFilter::default()
        } else {
            NameFilter::named(trimmed)
        };
        self.page.reset();
    }

    /// Clear both the typed text and the committed filter, back to page one.
    pub fn clear_filter(&mut self) {
        self.filter_input.clear();
        self.filter = NameFilter::default();
        self.page.reset();
    }

    /// Total pages implied by the last loaded envelope, zero before any load.
    pub fn total_pages(&self) -> u64 {
        self.slot
            .data
            .as_ref()
            .map(|page| page.total_pages(self.page.limit))
            .unwrap_or(0)
    }
}

/// Derived dashboard model, computed once from the raw fetch results and
/// then rendered without further aggregation work per frame.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub weapon_total: u64,
    pub armor_total: u64,
    pub boss_total: u64,
    pub class_total: u64,
    /// Boss counts per tier label, known tiers first, `Unclassified` last.
    pub tier_distribution: Vec<(String, u64)>,
    /// Weapon counts per category from the statistics aggregation.
    pub category_counts: Vec<(String, u64)>,
    pub averages: Option<AvgWeaponStats>,
    pub top_damage: Vec<TopDamageEntry>,
    /// Bosses whose great-rune flag is a genuine boolean `true`.
    pub great_rune_bosses: Vec<Boss>,
    /// Bosses whose remembrance flag is a genuine boolean `true`.
    pub remembrance_bosses: Vec<Boss>,
}

/// Display order for the known boss tiers.
const TIER_ORDER: [&str; 3] = ["Legendary", "Major", "Minor"];

impl DashboardData {
    /// Build the dashboard model from the five raw fetch results.
    pub fn from_parts(
        stats: WeaponStatistics,
        weapon_total: u64,
        armor_total: u64,
        class_total: u64,
        bosses: Page<Boss>,
    ) -> Self {
        let mut tier_counts: BTreeMap<String, u64> = BTreeMap::new();
        for boss in &bosses.items {
            *tier_counts.entry(boss.tier_label().to_string()).or_default() += 1;
        }

        let mut tier_distribution = Vec::new();
        for tier in TIER_ORDER {
            if let Some(count) = tier_counts.remove(tier) {
                tier_distribution.push((tier.to_string(), count));
            }
        }
        let unclassified = tier_counts.remove(UNCLASSIFIED_TIER);
        // Any tier label the backend invents later still gets a bar.
        tier_distribution.extend(tier_counts);
        if let Some(count) = unclassified {
            tier_distribution.push((UNCLASSIFIED_TIER.to_string(), count));
        }

        let category_counts = stats
            .by_category
            .iter()
            .map(|entry| {
                (
                    entry
                        .category
                        .clone()
                        .unwrap_or_else(|| "Uncategorized".to_string()),
                    entry.count,
                )
            })
            .collect();

        let great_rune_bosses = bosses
            .items
            .iter()
            .filter(|b| b.grants_great_rune())
            .cloned()
            .collect();
        let remembrance_bosses = bosses
            .items
            .iter()
            .filter(|b| b.grants_remembrance())
            .cloned()
            .collect();

        Self {
            weapon_total,
            armor_total,
            boss_total: bosses.total,
            class_total,
            tier_distribution,
            category_counts,
            averages: stats.averages().cloned(),
            top_damage: stats.top_damage,
            great_rune_bosses,
            remembrance_bosses,
        }
    }
}

/// Top-level application state shared between the UI thread and async tasks.
///
/// The render path clones a snapshot under a brief read lock and draws from
/// the clone, so the lock is never held while laying out widgets.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub weapons: ExplorerState<Weapon>,
    /// Selected build archetype on the weapons screen. When set, the screen
    /// shows build recommendations instead of the paginated list.
    pub weapon_build_filter: Option<BuildType>,
    /// Recommendations for the selected build archetype.
    pub weapon_build: FetchSlot<Vec<Weapon>>,
    /// Distinct weapon categories, fetched once on first weapons-screen visit.
    pub weapon_categories: FetchSlot<Vec<String>>,
    pub armors: ExplorerState<Armor>,
    pub bosses: ExplorerState<Boss>,
    pub classes: ExplorerState<ClassDef>,
    pub dashboard: FetchSlot<DashboardData>,
    pub api_client: Option<Arc<ApiClient>>,
    /// `None` until the first health probe answers.
    pub backend_healthy: Option<bool>,
    pub last_health_check: std::time::Instant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boss(name: &str, tier: Option<&str>, great_rune: bool, remembrance: bool) -> Boss {
        let boss: Boss = serde_json::from_value(json!({
            "name": name,
            "boss_tier": tier,
            "has_great_rune": great_rune,
            "has_remembrance": remembrance,
        }))
        .unwrap();
        // Guards the fixture against wire-name drift: serde drops unknown
        // keys silently, which would turn every assertion below vacuous.
        assert_eq!(boss.boss_tier.as_deref(), tier);
        assert_eq!(boss.grants_great_rune(), great_rune);
        assert_eq!(boss.grants_remembrance(), remembrance);
        boss
    }

    // ========== FetchSlot Tests ==========

    #[test]
    fn fetch_slot_resolves_matching_sequence() {
        let mut slot = FetchSlot::<u32>::default();
        let seq = slot.begin();
        assert!(slot.loading);

        assert!(slot.resolve(seq, Ok(7)));
        assert!(!slot.loading);
        assert_eq!(slot.data, Some(7));
        assert!(slot.error.is_none());
    }

    #[test]
    fn fetch_slot_discards_stale_response() {
        let mut slot = FetchSlot::<u32>::default();
        let first = slot.begin();
        let second = slot.begin();

        // The older request lands late and must be ignored.
        assert!(!slot.resolve(first, Ok(1)));
        assert!(slot.loading);
        assert!(slot.data.is_none());

        assert!(slot.resolve(second, Ok(2)));
        assert_eq!(slot.data, Some(2));
    }

    #[test]
    fn fetch_slot_failure_keeps_previous_data() {
        let mut slot = FetchSlot::<u32>::default();
        let seq = slot.begin();
        slot.resolve(seq, Ok(10));

        let seq = slot.begin();
        assert!(slot.error.is_none(), "begin clears previous error");
        slot.resolve(seq, Err("backend down".to_string()));

        assert_eq!(slot.data, Some(10));
        assert_eq!(slot.error.as_deref(), Some("backend down"));
        assert!(!slot.loading);
    }

    #[test]
    fn fetch_slot_stale_error_does_not_clobber_fresh_data() {
        let mut slot = FetchSlot::<u32>::default();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.resolve(second, Ok(2)));
        assert!(!slot.resolve(first, Err("timeout".to_string())));
        assert_eq!(slot.data, Some(2));
        assert!(slot.error.is_none());
    }

    // ========== ExplorerState Tests ==========

    #[test]
    fn apply_filter_trims_and_resets_page() {
        let mut explorer = ExplorerState::<Weapon>::default();
        explorer.page.goto_page(4);
        explorer.filter_input = "  Uchigatana  ".to_string();

        explorer.apply_filter();

        assert_eq!(explorer.filter, NameFilter::named("Uchigatana"));
        assert_eq!(explorer.page.skip, 0);
    }

    #[test]
    fn blank_filter_input_clears_the_filter() {
        let mut explorer = ExplorerState::<Weapon>::default();
        explorer.filter = NameFilter::named("sword");
        explorer.filter_input = "   ".to_string();

        explorer.apply_filter();

        assert!(explorer.filter.is_empty());
    }

    #[test]
    fn total_pages_is_zero_before_first_load() {
        let explorer = ExplorerState::<Weapon>::default();
        assert_eq!(explorer.total_pages(), 0);
    }

    // ========== Screen Tests ==========

    #[test]
    fn screen_all_starts_at_dashboard() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 5);
        assert_eq!(screens[0], Screen::Dashboard);
        assert_eq!(screens[4], Screen::Classes);
    }

    #[test]
    fn screen_titles() {
        assert_eq!(Screen::Dashboard.title(), "Dashboard");
        assert_eq!(Screen::Weapons.title(), "Weapons");
        assert_eq!(Screen::Classes.title(), "Classes");
    }

    // ========== DashboardData Tests ==========

    #[test]
    fn tier_distribution_orders_known_tiers_and_sentinel_last() {
        let bosses = Page {
            items: vec![
                boss("Malenia", Some("Legendary"), false, true),
                boss("Margit", Some("Major"), false, false),
                boss("Unnamed", None, false, false),
                boss("Godrick", Some("Legendary"), true, true),
                boss("Soldier", Some("Minor"), false, false),
            ],
            total: 5,
            skip: 0,
            limit: 500,
        };

        let data = DashboardData::from_parts(WeaponStatistics::default(), 0, 0, 0, bosses);

        assert_eq!(
            data.tier_distribution,
            vec![
                ("Legendary".to_string(), 2),
                ("Major".to_string(), 1),
                ("Minor".to_string(), 1),
                (UNCLASSIFIED_TIER.to_string(), 1),
            ]
        );
    }

    #[test]
    fn carousels_require_genuine_boolean_true() {
        // has_great_rune arrives as a truthy string here; the lenient decoder
        // drops it, so the boss must not appear in the great-rune carousel.
        let tainted: Boss = serde_json::from_value(json!({
            "name": "Rykard",
            "has_great_rune": "true",
            "has_remembrance": true,
        }))
        .unwrap();

        let bosses = Page {
            items: vec![tainted, boss("Morgott", Some("Legendary"), true, true)],
            total: 2,
            skip: 0,
            limit: 500,
        };

        let data = DashboardData::from_parts(WeaponStatistics::default(), 0, 0, 0, bosses);

        assert_eq!(data.great_rune_bosses.len(), 1);
        assert_eq!(data.great_rune_bosses[0].name, "Morgott");
        assert_eq!(data.remembrance_bosses.len(), 2);
    }

    #[test]
    fn boss_total_comes_from_envelope_not_item_count() {
        let bosses = Page {
            items: vec![boss("Margit", Some("Major"), false, false)],
            total: 183,
            skip: 0,
            limit: 500,
        };

        let data = DashboardData::from_parts(WeaponStatistics::default(), 10, 20, 30, bosses);

        assert_eq!(data.boss_total, 183);
        assert_eq!(data.weapon_total, 10);
        assert_eq!(data.armor_total, 20);
        assert_eq!(data.class_total, 30);
    }

    #[test]
    fn category_counts_label_missing_category() {
        let stats: WeaponStatistics = serde_json::from_value(json!({
            "by_category": [
                {"_id": "Katana", "count": 12},
                {"_id": null, "count": 3},
            ],
            "avg_stats": [],
            "top_damage": [],
        }))
        .unwrap();

        let bosses = Page {
            items: vec![],
            total: 0,
            skip: 0,
            limit: 500,
        };
        let data = DashboardData::from_parts(stats, 0, 0, 0, bosses);

        assert_eq!(
            data.category_counts,
            vec![("Katana".to_string(), 12), ("Uncategorized".to_string(), 3)]
        );
    }
}
