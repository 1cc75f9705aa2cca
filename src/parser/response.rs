use chrono::NaiveDate;
use serde_json::Value;
use tracing::error;

use crate::model::establishment::Establishment;
use crate::utils::constants::DATE_FORMAT;

static ITEMS_KEY: &str = "etablissements";

/// One source item could not fill the record; carries the JSON pointer
/// of the field that stopped it.
struct SkippedField(&'static str);

/// Map a search response body to establishment records.
///
/// Never fails: a body without an `etablissements` array yields an empty
/// vec, and items missing any required field are logged and dropped.
/// Surviving records keep their source order.
pub fn parse_response(body: &Value) -> Vec<Establishment> {
    let Some(items) = body.get(ITEMS_KEY).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut establishments = Vec::with_capacity(items.len());
    for item in items {
        match parse_item(item) {
            Ok(establishment) => establishments.push(establishment),
            Err(SkippedField(field)) => {
                error!(field, "failed to parse establishment, item skipped");
            }
        }
    }
    establishments
}

fn parse_item(item: &Value) -> Result<Establishment, SkippedField> {
    let address = format!(
        "{} {} {}",
        text(item, "/adresseEtablissement/numeroVoieEtablissement")?,
        text(item, "/adresseEtablissement/typeVoieEtablissement")?,
        text(item, "/adresseEtablissement/libelleVoieEtablissement")?,
    );

    let raw_date = text(item, "/dateCreationEtablissement")?;
    let creation_date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
        .map_err(|_| SkippedField("/dateCreationEtablissement"))?;

    Ok(Establishment {
        siret: text(item, "/siret")?.to_owned(),
        name: text(item, "/uniteLegale/denominationUniteLegale")?.to_owned(),
        address,
        postal_code: text(item, "/adresseEtablissement/codePostalEtablissement")?.to_owned(),
        city: text(item, "/adresseEtablissement/libelleCommuneEtablissement")?.to_owned(),
        activity_code: text(item, "/uniteLegale/activitePrincipaleUniteLegale")?.to_owned(),
        creation_date,
    })
}

fn text<'a>(item: &'a Value, pointer: &'static str) -> Result<&'a str, SkippedField> {
    item.pointer(pointer)
        .and_then(Value::as_str)
        .ok_or(SkippedField(pointer))
}
