// Public API - what other modules can use
pub use handlers::{execute_graphql, graphiql, index, GRAPHQL_PATH};
pub use schema::{build_schema, BocceSchema, MutationRoot, QueryRoot};
pub use types::{AddGameResult, AddPlayerResult, DeleteResult, Game, Player};

// Internal modules
mod handlers;
mod schema;
mod types;
