//! Router collaborator.
//!
//! The routing framework is external; the core only needs to ask it to go
//! somewhere and, occasionally, where it currently is.

/// Route paths known to the console.
pub mod routes {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PRODUCTS: &str = "/products";
    pub const EMPLOYEES: &str = "/employees";
    pub const CLIENTS: &str = "/clients";
    pub const PROMOTIONS: &str = "/promotions";
}

/// Abstraction over the routing framework.
pub trait Navigator: Send + Sync {
    /// Navigate to a route path.
    fn navigate(&self, path: &str);

    /// The path currently displayed.
    fn current_path(&self) -> String;
}
