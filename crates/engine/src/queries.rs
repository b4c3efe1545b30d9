//! NameQueries: the name query surface
//!
//! ## Design
//!
//! `NameQueries` holds configuration and the long-lived resolvers only.
//! Chain state is passed into every call as borrowed collaborator views, so
//! each call runs against exactly one registry snapshot (or one locked
//! mempool) and nothing is cached between calls.
//!
//! ## Call shape
//!
//! Every call resolves its options first, then checks sync state, then
//! decodes its arguments, and only then touches the snapshot. Parameter and
//! decode errors therefore never depend on chain contents.

use std::path::Path;
use std::sync::Arc;

use namedb_core::{
    encoding, AddressResolver, ExpirationRule, Name, NameEncoding, NameError, NameHistoryStore,
    NameRegistry, NameResult, OwnershipResolver, PendingPool, Transaction, TxTimestampResolver,
};
use tracing::debug;

use crate::config::NameConfig;
use crate::export::{ExportPlan, ExportSummary, Exporter};
use crate::filter::{ConfirmationWindow, FilterSet, PatternFilter, PrefixFilter};
use crate::options::{ExportOptions, OptionsObject, QueryOptions, ScanOptions};
use crate::pending::{pending_operations, project_pending};
use crate::projection::{NameInfo, Projector};
use crate::rawtx::{build_name_operation, NameOpRequest, NameOpResult};
use crate::scan::{scan_page, ScanPage};

/// Name query service
///
/// Stateless apart from configuration: cheap to clone and safe to share
/// across threads.
#[derive(Clone)]
pub struct NameQueries {
    config: NameConfig,
    expiration: Arc<dyn ExpirationRule>,
    addresses: Arc<dyn AddressResolver>,
    ownership: Option<Arc<dyn OwnershipResolver>>,
}

impl NameQueries {
    /// Create the service
    pub fn new(
        config: NameConfig,
        expiration: Arc<dyn ExpirationRule>,
        addresses: Arc<dyn AddressResolver>,
    ) -> Self {
        Self {
            config,
            expiration,
            addresses,
            ownership: None,
        }
    }

    /// Enable the `ismine` flag using `ownership`
    pub fn with_ownership(mut self, ownership: Arc<dyn OwnershipResolver>) -> Self {
        self.ownership = Some(ownership);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &NameConfig {
        &self.config
    }

    fn projector(&self, options: QueryOptions, current_height: u32) -> Projector<'_> {
        Projector::new(
            options,
            self.addresses.as_ref(),
            self.ownership.as_deref(),
            self.expiration.as_ref(),
            current_height,
        )
    }

    fn ensure_synced(registry: &dyn NameRegistry) -> NameResult<()> {
        if registry.is_initial_download() {
            return Err(NameError::InitialDownload);
        }
        Ok(())
    }

    fn ensure_history(&self) -> NameResult<()> {
        if !self.config.name_history {
            return Err(NameError::FeatureDisabled("-namehistory".to_string()));
        }
        Ok(())
    }

    fn decode_name(text: &str, options: &QueryOptions) -> NameResult<Name> {
        Ok(Name::new(encoding::decode(text, options.name_encoding)?))
    }

    fn not_found(name: &Name) -> NameError {
        NameError::NotFound(encoding::describe_name(name.as_bytes(), NameEncoding::Utf8))
    }

    /// Current record of one name (`name_show`)
    pub fn show(
        &self,
        registry: &dyn NameRegistry,
        name: &str,
        options: &OptionsObject,
    ) -> NameResult<NameInfo> {
        let options = QueryOptions::parse(options, &self.config)?;
        Self::ensure_synced(registry)?;
        let name = Self::decode_name(name, &options)?;
        let record = registry.get_name(&name).ok_or_else(|| Self::not_found(&name))?;
        Ok(self.projector(options, registry.height()).project_record(&name, &record))
    }

    /// Prior records followed by the current one (`name_history`)
    pub fn history(
        &self,
        registry: &dyn NameRegistry,
        history: &dyn NameHistoryStore,
        name: &str,
        options: &OptionsObject,
    ) -> NameResult<Vec<NameInfo>> {
        self.ensure_history()?;
        let options = QueryOptions::parse(options, &self.config)?;
        Self::ensure_synced(registry)?;
        let name = Self::decode_name(name, &options)?;
        let current = registry.get_name(&name).ok_or_else(|| Self::not_found(&name))?;

        let projector = self.projector(options, registry.height());
        let mut result: Vec<NameInfo> = history
            .get_history(&name)
            .into_iter()
            .map(|prior| projector.project_record(&name, &prior))
            .collect();
        result.push(projector.project_record(&name, &current));
        Ok(result)
    }

    /// One page of names in key order (`name_scan`)
    ///
    /// `count` defaults to the configured page size.
    pub fn scan(
        &self,
        registry: &dyn NameRegistry,
        start: Option<&str>,
        count: Option<i64>,
        options: &OptionsObject,
    ) -> NameResult<ScanPage> {
        let scan_options = ScanOptions::parse(options, &self.config)?;
        Self::ensure_synced(registry)?;
        let query = scan_options.query;
        let start = match start {
            Some(text) => Self::decode_name(text, &query)?,
            None => Name::default(),
        };
        let prefix = scan_options
            .prefix
            .as_deref()
            .map(|text| PrefixFilter::decode(text, query.name_encoding))
            .transpose()?;
        let pattern = scan_options
            .regexp
            .as_deref()
            .map(PatternFilter::new)
            .transpose()?;

        let count = count.unwrap_or(self.config.default_scan_count);
        if count <= 0 {
            return Ok(ScanPage::empty());
        }

        let height = registry.height();
        let mut filters = FilterSet::new(ConfirmationWindow::new(scan_options.bounds, height));
        if let Some(prefix) = prefix {
            filters = filters.with_prefix(prefix);
        }
        if let Some(pattern) = pattern {
            filters = filters.with_pattern(pattern);
        }

        let page = scan_page(registry, &start, count, &filters, &self.projector(query, height));
        debug!(
            target: "namedb::scan",
            height,
            count,
            returned = page.entries.len(),
            more = page.next_start.is_some(),
            "name_scan"
        );
        Ok(page)
    }

    /// Value-setting operations waiting in the mempool (`name_pending`)
    pub fn pending(
        &self,
        pool: &dyn PendingPool,
        name: Option<&str>,
        options: &OptionsObject,
    ) -> NameResult<Vec<NameInfo>> {
        let options = QueryOptions::parse(options, &self.config)?;
        let filter = name.map(|text| Self::decode_name(text, &options)).transpose()?;
        let ops = pending_operations(pool, filter.as_ref());
        // Pending entries carry no expiration, so the height is irrelevant.
        Ok(project_pending(&ops, &self.projector(options, 0)))
    }

    /// Write matching names to a file (`name_export`)
    pub fn export(
        &self,
        registry: &dyn NameRegistry,
        history: &dyn NameHistoryStore,
        timestamps: &dyn TxTimestampResolver,
        pattern: &str,
        path: &Path,
        options: &OptionsObject,
    ) -> NameResult<ExportSummary> {
        Self::ensure_synced(registry)?;
        let pattern = PatternFilter::new(pattern)?;
        let export_options = ExportOptions::parse(options, &self.config)?;
        if export_options.with_history {
            self.ensure_history()?;
        }

        let projector = self.projector(export_options.query, registry.height());
        let plan = ExportPlan {
            pattern: &pattern,
            with_history: export_options.with_history,
            max_count: export_options.max_count,
        };
        Exporter::new(registry, history, timestamps, &projector).write_file(path, &plan)
    }

    /// Attach a name operation to output `vout` of `tx` (`namerawtransaction`)
    ///
    /// Names and values are decoded with the configured default encodings.
    pub fn raw_transaction(
        &self,
        tx: Transaction,
        vout: u32,
        request: &NameOpRequest,
    ) -> NameResult<NameOpResult> {
        build_name_operation(tx, vout, request, QueryOptions::defaults(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namedb_core::{
        FixedExpiration, NameOp, NameRecord, NameValue, OutPoint, Script, TxId, TxOut,
    };
    use namedb_storage::{MemoryMempool, MemoryRegistry, MemoryTxIndex};
    use serde_json::json;

    struct Mine;

    impl OwnershipResolver for Mine {
        fn is_mine(&self, script: &Script) -> bool {
            script.as_bytes() == [1]
        }
    }

    fn queries(history: bool) -> NameQueries {
        let config = NameConfig {
            name_history: history,
            ..NameConfig::default()
        };
        NameQueries::new(
            config,
            Arc::new(FixedExpiration(10)),
            Arc::new(|s: &Script| Some(format!("N{}", s.as_bytes().len()))),
        )
    }

    fn record(value: &str, height: u32, tx: u8) -> NameRecord {
        NameRecord::new(
            NameValue::from(value),
            OutPoint::new(TxId::from_bytes([tx; 32]), 0),
            Script::new(vec![1]),
            height,
        )
    }

    fn opts(value: serde_json::Value) -> OptionsObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_show_expiration() {
        let registry = MemoryRegistry::new(false);
        registry.apply_block(100, vec![(Name::from("d/example"), record("v1", 100, 1))]);
        registry.set_height(105);

        let info = queries(false)
            .show(&registry.snapshot(), "d/example", &OptionsObject::new())
            .unwrap();
        assert_eq!(info.value.as_deref(), Some("v1"));
        assert_eq!(info.expires_in, Some(5));
        assert_eq!(info.expired, Some(false));
        assert_eq!(info.is_mine, None);
    }

    #[test]
    fn test_show_not_found() {
        let registry = MemoryRegistry::new(false);
        let err = queries(false)
            .show(&registry.snapshot(), "d/missing", &OptionsObject::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "name not found: 'd/missing'");
    }

    #[test]
    fn test_show_invalid_encoding_before_lookup() {
        let registry = MemoryRegistry::new(false);
        let err = queries(false)
            .show(&registry.snapshot(), "zz", &opts(json!({"nameEncoding": "hex"})))
            .unwrap_err();
        assert!(matches!(err, NameError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_initial_download_guard() {
        let registry = MemoryRegistry::new(false);
        registry.set_initial_download(true);
        let err = queries(false)
            .show(&registry.snapshot(), "d/a", &OptionsObject::new())
            .unwrap_err();
        assert!(matches!(err, NameError::InitialDownload));
        let err = queries(false)
            .scan(&registry.snapshot(), None, None, &OptionsObject::new())
            .unwrap_err();
        assert!(matches!(err, NameError::InitialDownload));
    }

    #[test]
    fn test_ownership_flag() {
        let registry = MemoryRegistry::new(false);
        registry.apply_block(1, vec![(Name::from("d/a"), record("v", 1, 1))]);
        let info = queries(false)
            .with_ownership(Arc::new(Mine))
            .show(&registry.snapshot(), "d/a", &OptionsObject::new())
            .unwrap();
        assert_eq!(info.is_mine, Some(true));
    }

    #[test]
    fn test_history_requires_feature() {
        let registry = MemoryRegistry::new(false);
        let snap = registry.snapshot();
        let err = queries(false)
            .history(&snap, &snap, "d/a", &OptionsObject::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "-namehistory is not enabled");
    }

    #[test]
    fn test_history_oldest_first_then_current() {
        let registry = MemoryRegistry::new(true);
        registry.apply_block(100, vec![(Name::from("d/example"), record("v1", 100, 1))]);
        registry.apply_block(103, vec![(Name::from("d/example"), record("v2", 103, 2))]);
        let snap = registry.snapshot();
        let result = queries(true)
            .history(&snap, &snap, "d/example", &OptionsObject::new())
            .unwrap();
        let values: Vec<_> = result.iter().map(|i| i.value.clone().unwrap()).collect();
        assert_eq!(values, vec!["v1", "v2"]);
    }

    #[test]
    fn test_scan_validates_before_count() {
        let registry = MemoryRegistry::new(false);
        let err = queries(false)
            .scan(&registry.snapshot(), None, Some(0), &opts(json!({"minConf": 0})))
            .unwrap_err();
        assert!(matches!(err, NameError::InvalidParameter(_)));

        let err = queries(false)
            .scan(&registry.snapshot(), None, Some(0), &opts(json!({"regexp": "["})))
            .unwrap_err();
        assert!(matches!(err, NameError::InvalidParameter(_)));
    }

    #[test]
    fn test_scan_prefix_and_default_count() {
        let registry = MemoryRegistry::new(false);
        let updates = (0..600u32)
            .map(|i| (Name::from(format!("d/{i:04}").as_str()), record("v", 1, (i % 250) as u8)))
            .collect();
        registry.apply_block(5, updates);
        registry.apply_update(Name::from("x/other"), record("v", 1, 251));

        let q = queries(false);
        let page = q
            .scan(&registry.snapshot(), None, None, &opts(json!({"prefix": "d/"})))
            .unwrap();
        assert_eq!(page.entries.len(), 500);
        assert_eq!(page.next_start, Some(Name::from("d/0499")));

        let page = q
            .scan(&registry.snapshot(), Some("x/"), Some(10), &OptionsObject::new())
            .unwrap();
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].name.as_deref(), Some("x/other"));
    }

    #[test]
    fn test_pending() {
        let pool = MemoryMempool::new();
        let mut tx = Transaction::new(
            TxId::from_bytes([9; 32]),
            vec![],
            vec![TxOut::with_name_op(
                1,
                Script::new(vec![1, 2]),
                NameOp::Update {
                    name: Name::from("d/a"),
                    value: NameValue::from("next"),
                },
            )],
        );
        tx.set_name_tx();
        pool.add(tx);

        let result = queries(false)
            .pending(&pool.lock(), Some("d/a"), &OptionsObject::new())
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].op.as_deref(), Some("name_update"));
        assert_eq!(result[0].address, "N2");
        assert!(result[0].expiration().is_none());

        let none = queries(false)
            .pending(&pool.lock(), Some("d/b"), &OptionsObject::new())
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_export_history_disabled_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let registry = MemoryRegistry::new(false);
        let snap = registry.snapshot();
        let err = queries(false)
            .export(
                &snap,
                &snap,
                &MemoryTxIndex::new(),
                "^d/",
                &path,
                &opts(json!({"withHistory": true})),
            )
            .unwrap_err();
        assert!(matches!(err, NameError::FeatureDisabled(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_raw_transaction_uses_defaults() {
        let tx = Transaction::new(
            TxId::from_bytes([1; 32]),
            vec![],
            vec![TxOut::plain(1, Script::new(vec![1]))],
        );
        let req = NameOpRequest::Update {
            name: "d/a".into(),
            value: "v".into(),
        };
        let result = queries(false).raw_transaction(tx, 0, &req).unwrap();
        assert!(result.tx.outputs[0].name_op.is_some());
    }
}
