// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: notes-database / filesystem / newsletter-archive adapters
// - presentation: HTTP handlers and routing
// - application: ports and use cases
// - domain: core models and pure parsing

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
