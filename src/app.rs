use crate::catalog::{Catalog, CatalogError, CityData};
use crate::domain::{
    mock, Article, AuthorProfile, Comment, Listing, Plan, PopularRoute, Reaction, Route, Shop,
    SubscriptionTier, UserPatch, UserProfile,
};
use crate::keybindings::{Context, KeybindingRegistry};
use crate::payment::{self, PaymentError, PaymentReceipt, PROCESSING_DELAY};
use crate::planner::{self, SEARCH_DELAY};
use crate::preferences::PreferenceManager;
use crate::storage::Database;
use crate::store::{AppState, Store, StoreAction};
use crate::task::{catch_task_panic, ViewTask};
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::{validate_url_for_open, website_url, MAX_INPUT_LENGTH};
use crate::views::subscription::current_tier;
use crate::views::{
    filter_and_sort_shops, filter_listings, paginate, CommunityView, HousingView, NavigatorView,
    PlanChoice, Section, ShopsView, SubscriptionView,
};
use ratatui::style::Style;
use std::borrow::Cow;
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Delay before the first-visit welcome toast appears.
pub const WELCOME_DELAY: Duration = Duration::from_millis(1000);

pub const WELCOME_MESSAGE: &str =
    "Welcome to cityguide! Explore housing, navigation, and local businesses.";

/// How long a toast stays up unless dismissed.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Name used by the sign-in toggle when none was given on the command line.
pub const DEMO_USER: &str = "Demo User";

/// Number of frames in the loading spinner animation.
pub const SPINNER_FRAMES: usize = 10;

/// Lines moved per article scroll step.
const SCROLL_STEP: u16 = 3;

// Task names reported with `AppEvent::TaskPanicked`.
const TASK_CATALOG: &str = "load_city";
const TASK_ROUTES: &str = "plan_routes";
const TASK_PAYMENT: &str = "payment";
const TASK_WELCOME: &str = "welcome";

// ============================================================================
// Toasts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Theme role used to draw a toast of this kind.
    pub fn role(self) -> &'static str {
        match self {
            Self::Info => "toast_info",
            Self::Success => "toast_success",
            Self::Error => "toast_error",
        }
    }
}

/// A transient notification in the corner of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Creation time in epoch milliseconds, bumped to stay unique.
    pub id: i64,
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

// ============================================================================
// Navigator Suggestions
// ============================================================================

/// Entry of the navigator suggestion list: landmarks first, then popular routes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suggestion {
    Landmark(&'static str),
    Popular(PopularRoute),
}

pub const SUGGESTION_COUNT: usize = mock::LANDMARKS.len() + mock::POPULAR_ROUTES.len();

pub fn suggestion_at(index: usize) -> Option<Suggestion> {
    let landmarks = mock::LANDMARKS.len();
    if index < landmarks {
        Some(Suggestion::Landmark(mock::LANDMARKS[index]))
    } else {
        mock::POPULAR_ROUTES
            .get(index - landmarks)
            .copied()
            .map(Suggestion::Popular)
    }
}

// ============================================================================
// Background Events
// ============================================================================

/// Simulated latencies of the background tasks.
#[derive(Debug, Clone, Copy)]
pub struct Delays {
    pub routes: Duration,
    pub payment: Duration,
    pub welcome: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            routes: SEARCH_DELAY,
            payment: PROCESSING_DELAY,
            welcome: WELCOME_DELAY,
        }
    }
}

/// Events from background tasks.
///
/// Every result carries the generation of the task that produced it so
/// results of cancelled or superseded runs can be dropped.
#[derive(Debug)]
pub enum AppEvent {
    CityLoaded {
        city: String,
        generation: u64,
        result: Result<CityData, CatalogError>,
    },
    RoutesFound {
        generation: u64,
        routes: Vec<Route>,
    },
    PaymentCompleted {
        generation: u64,
        result: Result<PaymentReceipt, PaymentError>,
    },
    WelcomeDue {
        generation: u64,
    },
    TaskPanicked {
        task: &'static str,
        error: String,
    },
}

/// Wrap `work` so that its event, or a panic report, reaches the UI loop.
fn reporting<Fut>(
    task: &'static str,
    tx: mpsc::Sender<AppEvent>,
    work: Fut,
) -> impl Future<Output = ()> + Send + 'static
where
    Fut: Future<Output = AppEvent> + Send + 'static,
{
    async move {
        let event = match catch_task_panic(work).await {
            Ok(event) => event,
            Err(error) => {
                tracing::error!(task, error = %error, "Background task panicked");
                AppEvent::TaskPanicked { task, error }
            }
        };
        if let Err(e) = tx.send(event).await {
            tracing::warn!(error = %e, task, "Channel send failed (receiver dropped)");
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App {
    pub db: Database,
    pub catalog: Catalog,
    pub store: Store,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,
    pub keybindings: KeybindingRegistry,

    pub section: Section,

    // Per-section view state
    pub housing: HousingView,
    pub shops: ShopsView,
    pub navigator: NavigatorView,
    pub subscription: SubscriptionView,
    pub community: CommunityView,

    // Static content
    pub article: Article,
    pub author: AuthorProfile,
    pub comments: Vec<Comment>,
    pub plans: Vec<Plan>,

    pub toasts: Vec<Toast>,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// City whose listings and shops are in the store.
    pub loaded_city: Option<String>,

    // Background work, one slot per owning view
    pub catalog_task: ViewTask,
    pub route_task: ViewTask,
    pub payment_task: ViewTask,
    pub welcome_task: ViewTask,
    pub delays: Delays,

    pub demo_user: String,
    pub needs_redraw: bool,
    pub show_help: bool,
    pub help_scroll_offset: u16,
    pub spinner_frame: usize,

    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(db: Database, catalog: Catalog, event_tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            db,
            catalog,
            store: Store::new(AppState::default()),
            theme_variant: ThemeVariant::Dark,
            theme: StyleMap::from_palette(&ThemeVariant::Dark.palette()),
            keybindings: KeybindingRegistry::new(),
            section: Section::default(),
            housing: HousingView::default(),
            shops: ShopsView::default(),
            navigator: NavigatorView::default(),
            subscription: SubscriptionView::default(),
            community: CommunityView::default(),
            article: mock::article(),
            author: mock::author_profile(),
            comments: mock::comments(),
            plans: mock::plans(),
            toasts: Vec::new(),
            status_message: None,
            loaded_city: None,
            catalog_task: ViewTask::new(TASK_CATALOG),
            route_task: ViewTask::new(TASK_ROUTES),
            payment_task: ViewTask::new(TASK_PAYMENT),
            welcome_task: ViewTask::new(TASK_WELCOME),
            delays: Delays::default(),
            demo_user: DEMO_USER.to_string(),
            needs_redraw: true,
            show_help: false,
            help_scroll_offset: 0,
            spinner_frame: 0,
            event_tx,
        }
    }

    /// Apply stored preferences: theme, starting city and key overrides.
    ///
    /// Returns warnings for overrides that could not be applied.
    pub fn apply_preferences(&mut self, prefs: &PreferenceManager) -> Vec<String> {
        match ThemeVariant::from_str_name(prefs.theme_variant()) {
            Some(variant) => self.set_theme(variant),
            None => tracing::warn!(theme = prefs.theme_variant(), "Unknown theme, keeping dark"),
        }
        self.store
            .dispatch(StoreAction::SetCity(prefs.default_city().to_string()));
        self.keybindings
            .apply_overrides(&prefs.keybinding_overrides())
    }

    /// Enter the first section and, on a first visit, schedule the welcome toast.
    /// Choose the section shown first. Unknown ids open housing.
    pub fn set_start_section(&mut self, id: &str) {
        self.section = Section::from_id(id);
        tracing::debug!(section = %self.section, "Start section");
    }

    pub fn start(&mut self, has_visited: bool) {
        self.enter_section();
        if !has_visited {
            self.schedule_welcome();
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.get()
    }

    // ========================================================================
    // Theme and Status
    // ========================================================================

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant. Returns its name for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    pub fn push_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = match self.toasts.last() {
            Some(last) if last.id >= now => last.id + 1,
            _ => now,
        };
        let message = message.into();
        tracing::debug!(id, kind = ?kind, message = %message, "Showing toast");
        self.toasts.push(Toast {
            id,
            message,
            kind,
            shown_at: Instant::now(),
        });
        self.needs_redraw = true;
        id
    }

    pub fn dismiss_toast(&mut self, id: i64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    /// Dismiss the newest toast, or the load error when no toast is up.
    pub fn dismiss_latest(&mut self) -> bool {
        if let Some(id) = self.toasts.last().map(|t| t.id) {
            return self.dismiss_toast(id);
        }
        if self.state().last_error.is_some() {
            self.store.dispatch(StoreAction::ClearError);
            return true;
        }
        false
    }

    pub fn clear_expired_toasts(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.shown_at.elapsed() < TOAST_TTL);
        before != self.toasts.len()
    }

    /// Whether any background work worth a spinner is in progress.
    pub fn is_busy(&self) -> bool {
        self.state().loading
            || self.navigator.searching
            || self
                .subscription
                .checkout
                .as_ref()
                .is_some_and(|c| c.processing)
    }

    // ========================================================================
    // Input Modes
    // ========================================================================

    /// Keybinding context for the current screen and mode.
    pub fn key_context(&self) -> Context {
        if self.is_editing() {
            return Context::Input;
        }
        match self.section {
            Section::Housing => Context::Housing,
            Section::Navigator => Context::Navigator,
            Section::Shops => Context::Shops,
            Section::Subscription if self.subscription.checkout.is_some() => Context::Checkout,
            Section::Subscription => Context::Subscription,
            Section::Community => Context::Community,
        }
    }

    pub fn is_editing(&self) -> bool {
        match self.section {
            Section::Housing => self.housing.editing,
            Section::Shops => self.shops.editing,
            Section::Navigator => self.navigator.editing,
            Section::Subscription | Section::Community => false,
        }
    }

    pub fn start_editing(&mut self) {
        match self.section {
            Section::Housing => self.housing.editing = true,
            Section::Shops => self.shops.editing = true,
            Section::Navigator => self.navigator.editing = true,
            Section::Subscription | Section::Community => {}
        }
    }

    fn active_input(&mut self) -> Option<&mut String> {
        match self.section {
            Section::Housing if self.housing.editing => Some(&mut self.housing.filter.search),
            Section::Shops if self.shops.editing => Some(&mut self.shops.filter.search),
            Section::Navigator if self.navigator.editing => Some(self.navigator.input_mut()),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let Some(input) = self.active_input() else {
            return;
        };
        if input.chars().count() >= MAX_INPUT_LENGTH {
            self.set_status(format!("Input too long (max {} chars)", MAX_INPUT_LENGTH));
            return;
        }
        input.push(c);
        self.filters_changed();
    }

    pub fn input_backspace(&mut self) {
        if let Some(input) = self.active_input() {
            input.pop();
            self.filters_changed();
        }
    }

    /// Leave the text field. In the navigator this submits the search.
    pub fn finish_editing(&mut self) {
        let submit = self.section == Section::Navigator && self.navigator.editing;
        self.cancel_editing();
        if submit {
            self.search_routes();
        }
    }

    pub fn cancel_editing(&mut self) {
        self.housing.editing = false;
        self.shops.editing = false;
        self.navigator.editing = false;
    }

    pub fn switch_field(&mut self) {
        if self.section == Section::Navigator {
            self.navigator.switch_field();
        }
    }

    // ========================================================================
    // Sections
    // ========================================================================

    pub fn switch_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        tracing::debug!(from = %self.section, to = %section, "Switching section");
        self.leave_section(section);
        self.section = section;
        self.help_scroll_offset = 0;
        self.enter_section();
        self.needs_redraw = true;
    }

    fn leave_section(&mut self, next: Section) {
        match self.section {
            Section::Housing => self.housing.reset_transient(),
            Section::Shops => self.shops.reset_transient(),
            Section::Navigator => {
                self.route_task.cancel();
                self.navigator.reset_transient();
            }
            Section::Subscription => {
                self.payment_task.cancel();
                self.subscription.reset_transient();
            }
            Section::Community => self.community.reset_transient(),
        }
        if !uses_city_data(next) && self.catalog_task.is_running() {
            self.catalog_task.cancel();
            self.store.dispatch(StoreAction::SetLoading(false));
        }
    }

    fn enter_section(&mut self) {
        if uses_city_data(self.section) && self.needs_city_load() {
            self.start_city_load();
        }
    }

    fn needs_city_load(&self) -> bool {
        !self.catalog_task.is_running()
            && self.loaded_city.as_deref() != Some(self.state().current_city.as_str())
    }

    // ========================================================================
    // City Data
    // ========================================================================

    pub fn change_city(&mut self, city: &str) {
        if city == self.state().current_city {
            return;
        }
        tracing::info!(city, "Changing city");
        self.store.dispatch(StoreAction::SetCity(city.to_string()));
        self.housing.cursor = 0;
        self.housing.detail.close();
        self.shops.cursor = 0;
        self.shops.detail.close();
        self.set_status(format!("City: {}", city));

        if uses_city_data(self.section) {
            self.start_city_load();
        } else if self.catalog_task.is_running() {
            self.catalog_task.cancel();
            self.store.dispatch(StoreAction::SetLoading(false));
        }
    }

    /// Move to the next (or previous) city of the built-in list.
    pub fn cycle_city(&mut self, forward: bool) {
        let cities = &mock::CITIES;
        let current = cities
            .iter()
            .position(|c| *c == self.state().current_city)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % cities.len()
        } else {
            (current + cities.len() - 1) % cities.len()
        };
        self.change_city(cities[next]);
    }

    /// Fetch listings and shops of the current city, replacing any load in flight.
    pub fn start_city_load(&mut self) {
        let city = self.state().current_city.clone();
        let catalog = self.catalog.clone();
        let tx = self.event_tx.clone();
        self.store.dispatch(StoreAction::SetLoading(true));
        let generation = self.catalog_task.start(|generation| {
            reporting(TASK_CATALOG, tx, async move {
                let result = catalog.load_city(&city).await;
                AppEvent::CityLoaded {
                    city,
                    generation,
                    result,
                }
            })
        });
        tracing::debug!(
            city = %self.state().current_city,
            source = %self.catalog.describe(),
            generation,
            "Loading city data"
        );
    }

    /// Apply a finished load. Returns false for stale results.
    pub fn apply_city_loaded(
        &mut self,
        city: String,
        generation: u64,
        result: Result<CityData, CatalogError>,
    ) -> bool {
        if !self.catalog_task.finish(generation) {
            return false;
        }
        self.store.dispatch(StoreAction::SetLoading(false));

        match result {
            Ok(data) => {
                tracing::info!(
                    city = %city,
                    listings = data.listings.len(),
                    shops = data.shops.len(),
                    "City data loaded"
                );
                self.store.dispatch(StoreAction::SetListings(data.listings));
                self.store.dispatch(StoreAction::SetShops(data.shops));
                self.store.dispatch(StoreAction::ClearError);
                self.loaded_city = Some(city);
                self.clamp_cursors();
            }
            Err(e) => {
                tracing::error!(city = %city, error = %e, "Failed to load city data");
                let message = format!("Could not load data for {}: {}", city, e);
                self.store.dispatch(StoreAction::SetError(message.clone()));
                self.push_toast(message, ToastKind::Error);
                self.loaded_city = None;
            }
        }
        true
    }

    /// Drop the loaded data marker and fetch again.
    pub fn reload(&mut self) {
        if uses_city_data(self.section) {
            self.loaded_city = None;
            self.start_city_load();
            self.set_status("Reloading...");
        }
    }

    // ========================================================================
    // Lists and Navigation
    // ========================================================================

    pub fn filtered_listings(&self) -> Vec<&Listing> {
        filter_listings(&self.state().listings, &self.housing.filter)
    }

    pub fn filtered_shops(&self) -> Vec<&Shop> {
        filter_and_sort_shops(&self.state().shops, &self.shops.filter)
    }

    pub fn visible_comments(&self) -> &[Comment] {
        paginate(&self.comments, self.community.page, self.community.per_page)
    }

    /// Listing under the cursor.
    pub fn cursor_listing(&self) -> Option<&Listing> {
        self.filtered_listings().get(self.housing.cursor).copied()
    }

    pub fn cursor_shop(&self) -> Option<&Shop> {
        self.filtered_shops().get(self.shops.cursor).copied()
    }

    pub fn detail_listing(&self) -> Option<&Listing> {
        self.housing
            .detail
            .resolve(&self.state().listings, |l| &l.id)
    }

    pub fn detail_shop(&self) -> Option<&Shop> {
        self.shops.detail.resolve(&self.state().shops, |s| &s.id)
    }

    fn cursor_comment_id(&self) -> Option<u32> {
        self.visible_comments()
            .get(self.community.cursor)
            .map(|c| c.id)
    }

    fn list_len(&self) -> usize {
        match self.section {
            Section::Housing => self.filtered_listings().len(),
            Section::Shops => self.filtered_shops().len(),
            Section::Navigator => self.navigator.routes.len(),
            Section::Subscription => self.plans.len(),
            Section::Community => self.visible_comments().len(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.section {
            Section::Housing => &mut self.housing.cursor,
            Section::Shops => &mut self.shops.cursor,
            Section::Navigator => &mut self.navigator.cursor,
            Section::Subscription => &mut self.subscription.cursor,
            Section::Community => &mut self.community.cursor,
        }
    }

    pub fn nav_down(&mut self) {
        let len = self.list_len();
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn nav_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Keep every cursor inside its (possibly shrunken) list.
    pub fn clamp_cursors(&mut self) {
        let listings = self.filtered_listings().len();
        let shops = self.filtered_shops().len();
        let comments = self.visible_comments().len();
        self.housing.cursor = self.housing.cursor.min(listings.saturating_sub(1));
        self.shops.cursor = self.shops.cursor.min(shops.saturating_sub(1));
        self.community.cursor = self.community.cursor.min(comments.saturating_sub(1));
        self.subscription.cursor = self
            .subscription
            .cursor
            .min(self.plans.len().saturating_sub(1));
    }

    fn filters_changed(&mut self) {
        match self.section {
            Section::Housing => self.housing.cursor = 0,
            Section::Shops => self.shops.cursor = 0,
            _ => {}
        }
    }

    /// Open the detail panel (or act) on the item under the cursor.
    pub fn select(&mut self) {
        match self.section {
            Section::Housing => {
                if let Some(id) = self.cursor_listing().map(|l| l.id.clone()) {
                    self.housing.detail.open(id);
                }
            }
            Section::Shops => {
                if let Some(id) = self.cursor_shop().map(|s| s.id.clone()) {
                    self.shops.detail.open(id);
                }
            }
            Section::Navigator => self.navigator.select_at_cursor(),
            Section::Subscription => self.choose_plan(),
            Section::Community => {}
        }
    }

    /// Close whatever overlay is open. Returns false when there was none.
    pub fn back(&mut self) -> bool {
        if self.show_help {
            self.show_help = false;
            return true;
        }
        match self.section {
            Section::Housing if self.housing.detail.is_open() => self.housing.detail.close(),
            Section::Shops if self.shops.detail.is_open() => self.shops.detail.close(),
            Section::Subscription if self.subscription.checkout.is_some() => {
                if !self.subscription.cancel() {
                    self.set_status("Payment in progress");
                }
            }
            Section::Community if self.community.show_author => self.community.show_author = false,
            _ => return false,
        }
        true
    }

    pub fn toggle_favorite(&mut self) {
        let added = match self.section {
            Section::Housing => {
                let Some(id) = self.cursor_listing().map(|l| l.id.clone()) else {
                    return;
                };
                self.housing.favorites.toggle(id)
            }
            Section::Shops => {
                let Some(id) = self.cursor_shop().map(|s| s.id.clone()) else {
                    return;
                };
                self.shops.favorites.toggle(id)
            }
            _ => return,
        };
        self.set_status(if added {
            "Added to favorites"
        } else {
            "Removed from favorites"
        });
    }

    // ========================================================================
    // Housing and Shops Filters
    // ========================================================================

    pub fn cycle_rooms(&mut self) {
        self.housing.filter.rooms = self.housing.filter.rooms.next();
        self.housing.cursor = 0;
    }

    pub fn adjust_price(&mut self, raise: bool, min: bool) {
        match (raise, min) {
            (true, true) => self.housing.raise_min(),
            (false, true) => self.housing.lower_min(),
            (true, false) => self.housing.raise_max(),
            (false, false) => self.housing.lower_max(),
        }
        self.housing.cursor = 0;
    }

    pub fn reset_filters(&mut self) {
        match self.section {
            Section::Housing => self.housing.filter = Default::default(),
            Section::Shops => self.shops.filter = Default::default(),
            _ => return,
        }
        self.filters_changed();
        self.set_status("Filters cleared");
    }

    pub fn cycle_category(&mut self) {
        self.shops.filter.cycle_category();
        self.shops.cursor = 0;
    }

    pub fn cycle_price(&mut self) {
        self.shops.filter.cycle_price();
        self.shops.cursor = 0;
    }

    pub fn cycle_sort(&mut self) {
        self.shops.filter.sort = self.shops.filter.sort.next();
        self.shops.cursor = 0;
    }

    /// Open the website of the shop in the detail panel (or under the cursor).
    pub fn open_shop_website(&mut self) {
        let shop = self.detail_shop().or_else(|| self.cursor_shop());
        let Some((name, raw)) =
            shop.map(|s| (s.name.clone(), s.contact.website.clone()))
        else {
            return;
        };
        let Some(raw) = raw else {
            self.set_status(format!("{} has no website", name));
            return;
        };

        let url = website_url(&raw);
        match validate_url_for_open(&url) {
            Ok(valid) => match open::that(valid.as_str()) {
                Ok(()) => self.set_status(format!("Opened {}", valid)),
                Err(e) => {
                    tracing::warn!(url = %valid, error = %e, "Failed to open browser");
                    self.set_status(format!("Failed to open browser: {}", e));
                }
            },
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Refusing to open website");
                self.set_status(format!("Cannot open website: {}", e));
            }
        }
    }

    // ========================================================================
    // Navigator
    // ========================================================================

    pub fn cycle_transport(&mut self) {
        self.navigator.mode = self.navigator.mode.next();
    }

    /// Start a route search. Both endpoints are required.
    pub fn search_routes(&mut self) {
        let Some(query) = self.navigator.query() else {
            self.set_status("Enter both a starting point and a destination");
            return;
        };
        self.navigator.searching = true;
        self.navigator.editing = false;

        let delay = self.delays.routes;
        let tx = self.event_tx.clone();
        self.route_task.start(|generation| {
            reporting(TASK_ROUTES, tx, async move {
                let routes = planner::plan_routes(query, delay).await;
                AppEvent::RoutesFound { generation, routes }
            })
        });
    }

    pub fn apply_routes(&mut self, generation: u64, routes: Vec<Route>) -> bool {
        if !self.route_task.finish(generation) {
            return false;
        }
        tracing::debug!(count = routes.len(), "Routes found");
        self.navigator.apply_routes(routes);
        true
    }

    pub fn next_suggestion(&mut self) {
        self.navigator.suggestion = (self.navigator.suggestion + 1) % SUGGESTION_COUNT;
    }

    pub fn prev_suggestion(&mut self) {
        self.navigator.suggestion =
            (self.navigator.suggestion + SUGGESTION_COUNT - 1) % SUGGESTION_COUNT;
    }

    /// Fill the form from the highlighted suggestion.
    pub fn use_suggestion(&mut self) {
        match suggestion_at(self.navigator.suggestion) {
            Some(Suggestion::Landmark(name)) => self.navigator.use_landmark(name),
            Some(Suggestion::Popular(route)) => self.navigator.use_popular(&route),
            None => {}
        }
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    pub fn current_tier(&self) -> SubscriptionTier {
        current_tier(self.state().user.as_ref().map(|u| u.subscription_tier))
    }

    pub fn toggle_period(&mut self) {
        self.subscription.period = self.subscription.period.toggle();
    }

    /// Pick the plan under the cursor.
    pub fn choose_plan(&mut self) {
        let Some(plan) = self.plans.get(self.subscription.cursor).cloned() else {
            return;
        };
        match self.subscription.choose(&plan, self.current_tier()) {
            PlanChoice::Free => self.set_status("The free plan needs no payment"),
            PlanChoice::Current => {
                self.set_status(format!("You are already on the {} plan", plan.name))
            }
            PlanChoice::Checkout => {
                tracing::debug!(plan = plan.name, "Opening checkout");
            }
        }
    }

    pub fn toggle_payment_method(&mut self) {
        if let Some(checkout) = self.subscription.checkout.as_mut() {
            if !checkout.processing {
                checkout.method = checkout.method.toggle();
            }
        }
    }

    pub fn confirm_payment(&mut self) {
        let Some(request) = self.subscription.begin_payment() else {
            return;
        };
        let delay = self.delays.payment;
        let tx = self.event_tx.clone();
        self.payment_task.start(|generation| {
            reporting(TASK_PAYMENT, tx, async move {
                let result = payment::process_payment(request, delay).await;
                AppEvent::PaymentCompleted { generation, result }
            })
        });
    }

    pub fn apply_payment(
        &mut self,
        generation: u64,
        result: Result<PaymentReceipt, PaymentError>,
    ) -> bool {
        if !self.payment_task.finish(generation) {
            return false;
        }
        self.subscription.finish();

        match result {
            Ok(receipt) => {
                tracing::info!(plan = receipt.plan_name, "Payment completed");
                if self.state().is_authenticated {
                    self.store.dispatch(StoreAction::UpdateUser(UserPatch {
                        subscription_tier: Some(receipt.tier),
                        ..UserPatch::default()
                    }));
                }
                self.push_toast(
                    format!(
                        "Payment processed successfully for {} plan!",
                        receipt.plan_name
                    ),
                    ToastKind::Success,
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Payment failed");
                self.push_toast(format!("Payment failed: {}", e), ToastKind::Error);
            }
        }
        true
    }

    // ========================================================================
    // Community
    // ========================================================================

    pub fn react_to_article(&mut self, reaction: Reaction) {
        self.community.article_reaction.pick(reaction);
    }

    pub fn react_to_comment(&mut self, reaction: Reaction) {
        if let Some(id) = self.cursor_comment_id() {
            self.community.react_to_comment(id, reaction);
        }
    }

    pub fn next_comment_page(&mut self) {
        self.community.next_page(self.comments.len());
    }

    pub fn prev_comment_page(&mut self) {
        self.community.prev_page();
    }

    pub fn scroll_article(&mut self, down: bool) {
        self.community.scroll = if down {
            self.community.scroll.saturating_add(SCROLL_STEP)
        } else {
            self.community.scroll.saturating_sub(SCROLL_STEP)
        };
    }

    pub fn toggle_author(&mut self) {
        self.community.show_author = !self.community.show_author;
    }

    // ========================================================================
    // User and Welcome
    // ========================================================================

    /// Sign the demo user in or out.
    pub fn toggle_user(&mut self) {
        if self.state().is_authenticated {
            self.store.dispatch(StoreAction::SetUser(None));
            self.set_status("Signed out");
        } else {
            self.sign_in(self.demo_user.clone());
        }
    }

    pub fn sign_in(&mut self, name: String) {
        self.set_status(format!("Signed in as {}", name));
        self.store
            .dispatch(StoreAction::SetUser(Some(UserProfile::new(name))));
    }

    pub fn schedule_welcome(&mut self) {
        let delay = self.delays.welcome;
        let tx = self.event_tx.clone();
        self.welcome_task.start(|generation| {
            reporting(TASK_WELCOME, tx, async move {
                tokio::time::sleep(delay).await;
                AppEvent::WelcomeDue { generation }
            })
        });
    }

    /// Show the welcome toast. Returns true when the visit should be recorded.
    pub fn apply_welcome(&mut self, generation: u64) -> bool {
        if !self.welcome_task.finish(generation) {
            return false;
        }
        self.push_toast(WELCOME_MESSAGE, ToastKind::Info);
        true
    }

    pub fn apply_task_panicked(&mut self, task: &'static str, error: &str) {
        match task {
            TASK_CATALOG => {
                self.catalog_task.cancel();
                self.store.dispatch(StoreAction::SetLoading(false));
            }
            TASK_ROUTES => {
                self.route_task.cancel();
                self.navigator.searching = false;
            }
            TASK_PAYMENT => {
                self.payment_task.cancel();
                self.subscription.finish();
            }
            _ => {}
        }
        self.push_toast(format!("Background task {} failed: {}", task, error), ToastKind::Error);
    }
}

/// Sections that show the current city's listings or shops.
fn uses_city_data(section: Section) -> bool {
    matches!(section, Section::Housing | Section::Shops)
}

// ============================================================================
// Resource Cleanup
// ============================================================================

impl Drop for App {
    fn drop(&mut self) {
        tracing::debug!("Cancelling background tasks on App drop");
        self.catalog_task.cancel();
        self.route_task.cancel();
        self.payment_task.cancel();
        self.welcome_task.cancel();
    }
}
