mod gateway;
mod session;

pub use gateway::CatalogGateway;
pub use gateway::recommendation_params;
pub use session::SessionManager;
