//! In-memory representation of an API description.
//!
//! The model covers the parts of an OpenAPI-style document that the scorer
//! and structural validator inspect: metadata, servers, security, paths with
//! their operations, reusable components and tags. Every object keeps the
//! keys it does not recognize in a flattened `extensions` map, so documents
//! using vendor extensions or newer keywords still load.
//!
//! ```
//! use api_scorer::model::Document;
//!
//! let doc: Document = serde_json::from_str(r#"{
//!     "openapi": "3.0.3",
//!     "info": {"title": "Users", "version": "2.0.0"},
//!     "paths": {"/users": {"get": {"responses": {"200": {"description": "ok"}}}}}
//! }"#).unwrap();
//!
//! assert_eq!(doc.path_count(), 1);
//! assert_eq!(doc.operation_count(), 1);
//! ```

mod document;
mod operation;
mod schema;

pub use document::*;
pub use operation::*;
pub use schema::*;
