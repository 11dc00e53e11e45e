use crate::client::auth::{AuthGate, AuthState, SessionStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Public,
    Admin,
}

impl View {
    /// `/admin` and anything under it is the admin view, every other path is public
    pub fn from_path(path: &str) -> View {
        match path.strip_prefix("/admin") {
            Some("") => View::Admin,
            Some(rest) if rest.starts_with('/') => View::Admin,
            _ => View::Public,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Public => "/",
            View::Admin => "/admin",
        }
    }
}

/// what the shell should render right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    PublicCatalog,
    AdminLogin,
    AdminDashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    view: View,
    path: String,
}

impl Shell {
    pub fn from_path(path: &str) -> Self {
        Self {
            view: View::from_path(path),
            path: path.to_string(),
        }
    }

    /// switches view and rewrites the location. Returns the new path
    pub fn navigate(&mut self, view: View) -> &str {
        self.view = view;
        self.path = view.path().to_string();
        &self.path
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn screen(&self, auth: AuthState) -> Screen {
        match (auth, self.view) {
            (AuthState::Loading, _) => Screen::Loading,
            (_, View::Public) => Screen::PublicCatalog,
            (AuthState::Anonymous, View::Admin) => Screen::AdminLogin,
            (AuthState::Authenticated, View::Admin) => Screen::AdminDashboard,
        }
    }

    /// ends the admin session and goes back to the public catalog
    pub fn logout<S: SessionStorage>(&mut self, gate: &mut AuthGate<S>) {
        gate.logout();
        self.navigate(View::Public);
    }
}
