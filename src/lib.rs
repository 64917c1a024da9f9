pub mod declaration;
pub mod error;
pub mod export;
pub mod expr;
pub mod schema;
pub mod template;
pub mod utils;
pub mod value;

pub use declaration::{DeletionPolicy, Output, ParamType, Parameter, Resource};
pub use error::CumulusError;
pub use expr::Expr;
pub use schema::{PropShape, ResourceSpec, SchemaRegistry};
pub use template::Template;
pub use value::Value;
