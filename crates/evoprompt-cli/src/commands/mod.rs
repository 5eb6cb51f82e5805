//! Command handlers, one module per subcommand.
//!
//! Handlers wire the core services to the production adapters using paths
//! from [`AppConfig`], run them and hand the results to the [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

use evoprompt_adapters::{JsonSchemaEngine, LocalFilesystem};
use evoprompt_core::application::{
    CatalogService, EntangleService, GenerationService, SchemaLocator, ValidationService,
};

use crate::config::AppConfig;

pub mod completions;
pub mod entangle;
pub mod examples;
pub mod generate;
pub mod plugin;
pub mod quantum;
pub mod schemas;
pub mod validate;

fn locator(config: &AppConfig) -> SchemaLocator {
    SchemaLocator::new(config.schemas_dir())
}

fn validation_service(config: &AppConfig) -> ValidationService {
    ValidationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonSchemaEngine::new()),
        locator(config),
    )
}

fn generation_service() -> GenerationService {
    GenerationService::new(Box::new(LocalFilesystem::new()))
}

fn entangle_service(config: &AppConfig) -> EntangleService {
    EntangleService::new(validation_service(config), generation_service())
}

fn catalog_service(config: &AppConfig) -> CatalogService {
    CatalogService::new(
        Box::new(LocalFilesystem::new()),
        locator(config),
        config.examples_dir(),
    )
}
