//! Application shell: login route, tab navigation and the side drawer.
//!
//! The active screen sees every event first; the shell only handles what
//! the screen leaves alone (tab shortcuts, drawer, logout).

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::prefs::{self, Preferences};
use crate::screens::assessment::AssessmentScreen;
use crate::screens::courses::CoursesScreen;
use crate::screens::home::HomeScreen;
use crate::screens::login::{self, LoginScreen};
use crate::screens::profile::ProfileScreen;
use crate::screens::progress::ProgressScreen;
use crate::screens::{Screen, Tab};
use crate::session::{self, User};
use crate::storage::KeyValueStore;

use actions::*;

pub enum Route {
    Login(LoginScreen),
    Main(Box<MainShell>),
}

/// Everything shown while logged in. Each tab keeps its state while the
/// user moves between tabs.
pub struct MainShell {
    pub user: User,
    pub tab: Tab,
    pub drawer_open: bool,
    pub home: HomeScreen,
    pub courses: CoursesScreen,
    pub progress: ProgressScreen,
    pub assessment: AssessmentScreen,
    pub profile: ProfileScreen,
}

impl MainShell {
    pub fn new(user: User, prefs: Preferences) -> Self {
        Self {
            tab: Tab::Home,
            drawer_open: false,
            home: HomeScreen::new(user.clone(), prefs.interest_area as usize),
            courses: CoursesScreen::new(prefs.course_filter as usize),
            progress: ProgressScreen::new(),
            assessment: AssessmentScreen::new(),
            profile: ProfileScreen::new(user.clone()),
            user,
        }
    }

    pub fn active(&self) -> &dyn Screen {
        match self.tab {
            Tab::Home => &self.home,
            Tab::Courses => &self.courses,
            Tab::Progress => &self.progress,
            Tab::Assessment => &self.assessment,
            Tab::Profile => &self.profile,
        }
    }

    pub fn active_mut(&mut self) -> &mut dyn Screen {
        match self.tab {
            Tab::Home => &mut self.home,
            Tab::Courses => &mut self.courses,
            Tab::Progress => &mut self.progress,
            Tab::Assessment => &mut self.assessment,
            Tab::Profile => &mut self.profile,
        }
    }

    pub fn prefs(&self) -> Preferences {
        Preferences {
            interest_area: self.home.selected_area as u8,
            course_filter: self.courses.filter as u8,
        }
    }

    fn select(&mut self, tab: Tab) {
        self.tab = tab;
        self.drawer_open = false;
    }
}

/// What the shell should do after an event.
enum Outcome {
    Ignored,
    Handled,
    LoggedIn(User),
    LogOut,
}

pub struct App {
    store: Box<dyn KeyValueStore>,
    pub route: Route,
}

impl App {
    /// Start logged in when a session survives in the store.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let mut app = Self {
            route: Route::Login(LoginScreen::new(&*store)),
            store,
        };
        if let Some(user) = session::restore_session(&*app.store) {
            log!("SkillUpPlus: session restored ({})", user.email);
            app.enter_main(user);
        }
        app
    }

    fn enter_main(&mut self, user: User) {
        let prefs = prefs::load(&mut *self.store);
        self.route = Route::Main(Box::new(MainShell::new(user, prefs)));
    }

    fn leave_main(&mut self) {
        session::logout(&mut *self.store);
        self.route = Route::Login(LoginScreen::new(&*self.store));
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    /// Returns true if the event changed anything.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let outcome = match &mut self.route {
            Route::Login(screen) => handle_login(screen, &mut *self.store, event),
            Route::Main(shell) => handle_main(shell, &mut *self.store, event),
        };
        match outcome {
            Outcome::Ignored => false,
            Outcome::Handled => true,
            Outcome::LoggedIn(user) => {
                self.enter_main(user);
                true
            }
            Outcome::LogOut => {
                self.leave_main();
                true
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}

fn handle_login(
    screen: &mut LoginScreen,
    store: &mut dyn KeyValueStore,
    event: &InputEvent,
) -> Outcome {
    match event {
        InputEvent::Enter | InputEvent::Click(login::SUBMIT) => match screen.submit(store) {
            Some(user) => Outcome::LoggedIn(user),
            None => Outcome::Handled,
        },
        _ if screen.handle_input(event) => Outcome::Handled,
        _ => Outcome::Ignored,
    }
}

fn handle_main(shell: &mut MainShell, store: &mut dyn KeyValueStore, event: &InputEvent) -> Outcome {
    if shell.drawer_open {
        return handle_drawer(shell, event);
    }

    let before = shell.prefs();
    if shell.active_mut().handle_input(event) {
        let after = shell.prefs();
        if after != before {
            prefs::save(store, after);
        }
        return Outcome::Handled;
    }

    match event {
        InputEvent::Key('m') | InputEvent::Click(TOGGLE_DRAWER) => {
            shell.drawer_open = true;
            Outcome::Handled
        }
        InputEvent::Click(LOGOUT) => Outcome::LogOut,
        InputEvent::Key('x') if shell.tab == Tab::Profile => Outcome::LogOut,
        InputEvent::Click(id) if (TAB_BASE..TAB_BASE + Tab::ALL.len() as u16).contains(id) => {
            shell.select(Tab::ALL[(id - TAB_BASE) as usize]);
            Outcome::Handled
        }
        InputEvent::Key(c) => match Tab::from_key(*c) {
            Some(tab) => {
                shell.select(tab);
                Outcome::Handled
            }
            None => Outcome::Ignored,
        },
        InputEvent::Tab => {
            let next = (shell.tab.index() + 1) % Tab::ALL.len();
            shell.select(Tab::ALL[next]);
            Outcome::Handled
        }
        _ => Outcome::Ignored,
    }
}

/// The open drawer takes every event; anything it does not use closes it.
fn handle_drawer(shell: &mut MainShell, event: &InputEvent) -> Outcome {
    match event {
        InputEvent::Click(id)
            if (DRAWER_ITEM_BASE..DRAWER_ITEM_BASE + Tab::ALL.len() as u16).contains(id) =>
        {
            shell.select(Tab::ALL[(id - DRAWER_ITEM_BASE) as usize]);
            Outcome::Handled
        }
        InputEvent::Click(LOGOUT) | InputEvent::Key('x') => Outcome::LogOut,
        InputEvent::Key(c) => {
            match Tab::from_key(*c) {
                Some(tab) => shell.select(tab),
                None => shell.drawer_open = false,
            }
            Outcome::Handled
        }
        _ => {
            shell.drawer_open = false;
            Outcome::Handled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::home::AREA_BASE;
    use crate::session::{KEY_SAVED_EMAIL, KEY_USER_EMAIL, KEY_USER_NAME};
    use crate::storage::MemoryStore;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_input(&InputEvent::Key(c));
        }
    }

    fn logged_in() -> App {
        let mut store = MemoryStore::new();
        store.set(KEY_USER_EMAIL, "ana@empresa.com");
        store.set(KEY_USER_NAME, "ana");
        App::new(Box::new(store))
    }

    fn shell(app: &App) -> &MainShell {
        match &app.route {
            Route::Main(shell) => shell,
            Route::Login(_) => panic!("expected the main shell"),
        }
    }

    #[test]
    fn starts_at_login_without_session() {
        let app = App::new(Box::new(MemoryStore::new()));
        assert!(matches!(app.route, Route::Login(_)));
    }

    #[test]
    fn restored_session_starts_at_home() {
        let app = logged_in();
        assert_eq!(shell(&app).tab, Tab::Home);
        assert_eq!(shell(&app).user.name, "ana");
    }

    #[test]
    fn login_flow() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        type_str(&mut app, "maria@empresa.com");
        app.handle_input(&InputEvent::Tab);
        type_str(&mut app, "segredo");
        app.handle_input(&InputEvent::Tab);
        app.handle_input(&InputEvent::Key(' '));
        assert!(app.handle_input(&InputEvent::Enter));

        assert_eq!(shell(&app).user.name, "maria");
        assert_eq!(app.store().get(KEY_SAVED_EMAIL).as_deref(), Some("maria@empresa.com"));
    }

    #[test]
    fn invalid_login_stays_on_form() {
        let mut app = App::new(Box::new(MemoryStore::new()));
        type_str(&mut app, "maria");
        app.handle_input(&InputEvent::Click(login::SUBMIT));
        match &app.route {
            Route::Login(screen) => assert!(screen.errors.email.is_some()),
            Route::Main(_) => panic!("logged in with an invalid form"),
        }
    }

    #[test]
    fn tab_shortcuts() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Key('a'));
        assert_eq!(shell(&app).tab, Tab::Assessment);
        app.handle_input(&InputEvent::Click(TAB_BASE + 1));
        assert_eq!(shell(&app).tab, Tab::Courses);
        app.handle_input(&InputEvent::Key('u'));
        assert_eq!(shell(&app).tab, Tab::Profile);
    }

    #[test]
    fn screen_sees_keys_first() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Key('a'));
        // '1' answers a question instead of being ignored
        assert!(app.handle_input(&InputEvent::Key('1')));
        assert_eq!(shell(&app).assessment.state.current, 1);
        // 'h' is not an answer, so it switches tab
        app.handle_input(&InputEvent::Key('h'));
        assert_eq!(shell(&app).tab, Tab::Home);
        // answers survive the tab switch
        assert_eq!(shell(&app).assessment.state.engine.answered_count(), 1);
    }

    #[test]
    fn drawer_navigation() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Key('m'));
        assert!(shell(&app).drawer_open);
        app.handle_input(&InputEvent::Click(DRAWER_ITEM_BASE + Tab::Profile.index() as u16));
        assert_eq!(shell(&app).tab, Tab::Profile);
        assert!(!shell(&app).drawer_open);

        app.handle_input(&InputEvent::Click(TOGGLE_DRAWER));
        app.handle_input(&InputEvent::Esc);
        assert!(!shell(&app).drawer_open);
        assert_eq!(shell(&app).tab, Tab::Profile);
    }

    #[test]
    fn drawer_blocks_screen_input() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Key('m'));
        app.handle_input(&InputEvent::Right);
        assert_eq!(shell(&app).home.selected_area, 0);
        assert!(!shell(&app).drawer_open);
    }

    #[test]
    fn logout_from_drawer_keeps_remembered_credentials() {
        let mut store = MemoryStore::new();
        store.set(KEY_SAVED_EMAIL, "ana@empresa.com");
        store.set(crate::session::KEY_SAVED_PASSWORD, "segredo");
        store.set(KEY_USER_EMAIL, "ana@empresa.com");
        store.set(KEY_USER_NAME, "ana");
        let mut app = App::new(Box::new(store));

        app.handle_input(&InputEvent::Key('m'));
        app.handle_input(&InputEvent::Click(LOGOUT));

        match &app.route {
            Route::Login(screen) => {
                assert_eq!(screen.form.email, "ana@empresa.com");
                assert!(screen.form.remember_me);
            }
            Route::Main(_) => panic!("still logged in"),
        }
        assert_eq!(app.store().get(KEY_USER_EMAIL), None);
    }

    #[test]
    fn logout_resets_tab_to_home() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Key('u'));
        app.handle_input(&InputEvent::Key('x'));
        assert!(matches!(app.route, Route::Login(_)));

        // log back in
        type_str(&mut app, "ana@empresa.com");
        app.handle_input(&InputEvent::Tab);
        type_str(&mut app, "segredo");
        app.handle_input(&InputEvent::Enter);
        assert_eq!(shell(&app).tab, Tab::Home);
    }

    #[test]
    fn x_outside_profile_does_nothing() {
        let mut app = logged_in();
        assert!(!app.handle_input(&InputEvent::Key('x')));
        assert!(matches!(app.route, Route::Main(_)));
    }

    #[test]
    fn preference_changes_are_saved_and_restored() {
        let mut app = logged_in();
        app.handle_input(&InputEvent::Click(AREA_BASE + 2));
        app.handle_input(&InputEvent::Key('c'));
        app.handle_input(&InputEvent::Right);

        let json = app.store().get(prefs::STORAGE_KEY).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(saved["prefs"]["interest_area"], 2);
        assert_eq!(saved["prefs"]["course_filter"], 1);

        app.handle_input(&InputEvent::Key('u'));
        app.handle_input(&InputEvent::Key('x'));
        type_str(&mut app, "ana@empresa.com");
        app.handle_input(&InputEvent::Tab);
        type_str(&mut app, "segredo");
        app.handle_input(&InputEvent::Enter);

        assert_eq!(shell(&app).home.selected_area, 2);
        assert_eq!(shell(&app).courses.filter, 1);
    }
}
