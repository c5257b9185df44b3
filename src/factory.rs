//! # Abstract factory.
//!
//! Builds fresh façades from one shared [`CannedValues`] bag and applies the
//! factory [`Config`] (origin, initial log level, redaction) to each.
//!
//! ## Example
//! ```rust
//! use szmock::{AbstractFactory, CannedValues, SzAbstractFactory, SzProduct};
//! use tokio_util::sync::CancellationToken;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let factory = AbstractFactory::new(CannedValues::new().with_string("GetLicenseResult", "LIC"));
//! let ctx = CancellationToken::new();
//!
//! let product = factory.create_product(&ctx).await.unwrap();
//! assert_eq!(product.get_license(&ctx).await.unwrap(), "LIC");
//! # });
//! ```

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::canned::CannedValues;
use crate::config::Config;
use crate::error::SzResult;
use crate::szconfig::MockConfig;
use crate::szconfigmanager::MockConfigManager;
use crate::szdiagnostic::MockDiagnostic;
use crate::szengine::MockEngine;
use crate::szproduct::MockProduct;
use crate::traits::sealed::Instrumented;
use crate::traits::{
    SzAbstractFactory, SzConfig, SzConfigManager, SzDiagnostic, SzEngine, SzProduct,
};

/// Factory of mock façades.
#[derive(Debug, Clone, Default)]
pub struct AbstractFactory {
    canned: CannedValues,
    config: Config,
}

impl AbstractFactory {
    /// Factory with default [`Config`].
    pub fn new(canned: CannedValues) -> Self {
        Self::with_config(canned, Config::default())
    }

    pub fn with_config(canned: CannedValues, config: Config) -> Self {
        Self { canned, config }
    }

    /// Shared bag of canned values.
    pub fn canned(&self) -> &CannedValues {
        &self.canned
    }

    fn prepare<T: Instrumented>(&self, facade: T) -> T {
        facade.envelope().configure(&self.config);
        facade
    }
}

#[async_trait]
impl SzAbstractFactory for AbstractFactory {
    async fn create_config(&self, _ctx: &CancellationToken) -> SzResult<Box<dyn SzConfig>> {
        Ok(Box::new(self.prepare(MockConfig::from_canned(&self.canned))))
    }

    async fn create_config_manager(
        &self,
        _ctx: &CancellationToken,
    ) -> SzResult<Box<dyn SzConfigManager>> {
        Ok(Box::new(self.prepare(MockConfigManager::from_canned(&self.canned))))
    }

    async fn create_diagnostic(&self, _ctx: &CancellationToken) -> SzResult<Box<dyn SzDiagnostic>> {
        Ok(Box::new(self.prepare(MockDiagnostic::from_canned(&self.canned))))
    }

    async fn create_engine(&self, _ctx: &CancellationToken) -> SzResult<Box<dyn SzEngine>> {
        Ok(Box::new(self.prepare(MockEngine::from_canned(&self.canned))))
    }

    async fn create_product(&self, _ctx: &CancellationToken) -> SzResult<Box<dyn SzProduct>> {
        Ok(Box::new(self.prepare(MockProduct::from_canned(&self.canned))))
    }

    async fn destroy(&self, _ctx: &CancellationToken) -> SzResult<()> {
        Ok(())
    }

    async fn reinitialize(&self, _ctx: &CancellationToken, _config_id: i64) -> SzResult<()> {
        Ok(())
    }
}
