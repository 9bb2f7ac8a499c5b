//! Database-backed currency repository layer
//!
//! The store of record for installed currencies. Only the `default` name
//! context is persisted; the other contexts live in caches and in memory.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use core_kernel::{
    CoreError, Currency, CurrencyFactory, CurrencyId, CurrencyParameters, DomainPort, NameContext,
    SymbolType,
};
use domain_currency::{CurrencyRepository, LayerKind, RepositoryError, WriteOperation};

use crate::error::{db_to_port_error, DatabaseError};
use crate::store::{CurrencyRow, CurrencyStore, NewCurrencyRow};

/// Repository layer over a [`CurrencyStore`]
///
/// `update` and `delete` load the row first and fail with
/// `RepositoryError::CurrencyNotFound` when it is missing, leaving the
/// store unchanged.
#[derive(Debug, Clone)]
pub struct DatabaseRepository<S: CurrencyStore> {
    store: S,
}

impl<S: CurrencyStore> DatabaseRepository<S> {
    /// Creates a database layer over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn load(&self, id: CurrencyId) -> Result<Option<CurrencyRow>, RepositoryError> {
        let row = self.store.load(id.value()).await.map_err(port_error)?;
        // Rows without a positive key are not real installs
        Ok(row.filter(|row| row.id > 0))
    }
}

fn port_error(e: DatabaseError) -> RepositoryError {
    RepositoryError::Port(db_to_port_error(e))
}

fn row_to_currency(row: CurrencyRow) -> Result<Currency, CoreError> {
    let decimal_digits = u32::try_from(row.decimals).map_err(|_| {
        CoreError::validation(format!("stored decimals {} is negative", row.decimals))
    })?;

    let mut names = BTreeMap::new();
    if !row.name.is_empty() {
        names.insert(NameContext::Default, row.name);
    }

    let mut symbols = BTreeMap::new();
    if let Some(symbol) = row.symbol {
        symbols.insert(SymbolType::Default, symbol);
    }
    if let Some(symbol) = row.symbol_narrow {
        symbols.insert(SymbolType::Narrow, symbol);
    }

    CurrencyFactory::build(
        CurrencyParameters::new()
            .id(CurrencyId::new(row.id))
            .iso_code(row.iso_code)
            .numeric_iso_code(row.iso_code_num)
            .decimal_digits(decimal_digits)
            .display_names(names)
            .symbols(symbols)
            .conversion_rate(row.conversion_rate)
            .active(row.active),
    )
}

fn currency_to_new_row(currency: &Currency) -> Result<NewCurrencyRow, CoreError> {
    let decimals = i32::try_from(currency.decimal_digits()).map_err(|_| {
        CoreError::validation(format!(
            "decimal digits {} do not fit the decimals column",
            currency.decimal_digits()
        ))
    })?;

    Ok(NewCurrencyRow {
        iso_code: currency.iso_code().to_string(),
        iso_code_num: currency.numeric_iso_code().to_string(),
        decimals,
        name: currency
            .name(NameContext::Default)
            .map(str::to_string)
            .unwrap_or_default(),
        symbol: currency.symbol(SymbolType::Default).ok().map(str::to_string),
        symbol_narrow: currency.symbol(SymbolType::Narrow).ok().map(str::to_string),
        conversion_rate: currency.conversion_rate(),
        active: currency.is_active(),
    })
}

impl<S: CurrencyStore> DomainPort for DatabaseRepository<S> {}

#[async_trait]
impl<S: CurrencyStore> CurrencyRepository for DatabaseRepository<S> {
    fn name(&self) -> &'static str {
        "database"
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Persistent
    }

    #[instrument(skip(self), fields(currency_id = %id))]
    async fn get_by_id(&self, id: CurrencyId) -> Result<Option<Currency>, RepositoryError> {
        match self.load(id).await? {
            Some(row) => Ok(Some(row_to_currency(row)?)),
            None => {
                debug!("No currency row");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, currency), fields(iso_code = %currency.iso_code()))]
    async fn add(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        let inserted = self
            .store
            .insert(currency_to_new_row(&currency)?)
            .await
            .map_err(port_error)?;

        debug!(currency_id = inserted.id, "Currency row inserted");
        Ok(currency.with_id(CurrencyId::new(inserted.id)))
    }

    #[instrument(skip(self, currency), fields(currency_id = %currency.id()))]
    async fn update(&self, currency: Currency) -> Result<Currency, RepositoryError> {
        if self.load(currency.id()).await?.is_none() {
            return Err(RepositoryError::currency_not_found(
                currency.id(),
                WriteOperation::Update,
            ));
        }

        let row = currency_to_new_row(&currency)?.into_row(currency.id().value());
        let affected = self.store.update(&row).await.map_err(port_error)?;
        if affected == 0 {
            return Err(RepositoryError::currency_not_found(
                currency.id(),
                WriteOperation::Update,
            ));
        }

        debug!("Currency row updated");
        Ok(currency)
    }

    #[instrument(skip(self, currency), fields(currency_id = %currency.id()))]
    async fn delete(&self, currency: &Currency) -> Result<bool, RepositoryError> {
        if self.load(currency.id()).await?.is_none() {
            return Err(RepositoryError::currency_not_found(
                currency.id(),
                WriteOperation::Delete,
            ));
        }

        let affected = self
            .store
            .delete(currency.id().value())
            .await
            .map_err(port_error)?;
        debug!(affected, "Currency row deleted");
        Ok(affected > 0)
    }
}
