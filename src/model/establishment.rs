use chrono::NaiveDate;
use serde::Serialize;

/// A food & beverage establishment from the SIRENE registry.
///
/// Every field is populated: the parser drops source items that cannot
/// fill the whole record rather than emitting partial ones. No identity
/// beyond field equality; ownership passes to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Establishment {
    /// 14-digit identifier of the physical establishment.
    pub siret: String,
    /// Registered name of the owning legal unit.
    pub name: String,
    /// Street address: number, way type, way label, space-joined.
    pub address: String,
    /// 5-digit French postal code.
    pub postal_code: String,
    pub city: String,
    /// NAF/APE code of the primary activity.
    pub activity_code: String,
    /// Date the establishment was registered.
    pub creation_date: NaiveDate,
}
