use serde::Deserialize;

use super::TransportError;
use super::query::QueryBuilder;
use crate::domain::{
    CountriesResponse, Country, CountryCode, CountryFilter, Did, DidFilter, DidGroup,
    DidGroupFilter, DidGroupId, DidGroupsResponse, DidId, DidsResponse, Feature, FeatureId,
    OrderReference, Pagination,
};

pub(crate) const DID_GROUP_PATH: &str = "inventory/didgroup";
pub(crate) const DID_PATH: &str = "inventory/did";
pub(crate) const COUNTRY_PATH: &str = "inventory/country";

pub(crate) fn did_group_query(filter: &DidGroupFilter, defaults: Pagination) -> String {
    let mut query = QueryBuilder::new(filter.pagination, defaults);
    query.scalar_str(CountryCode::FIELD, Some(filter.country().as_str()));
    query.repeated("didGroupIds", &filter.did_group_ids);
    query.repeated(FeatureId::FIELD, &filter.feature_ids);
    query.scalar_num("stateId", filter.state_id);
    query.scalar_str("cityNamePattern", filter.city_name_pattern.as_deref());
    query.scalar_str("rateCenter", filter.rate_center.as_deref());
    query.scalar_str("areaCode", filter.area_code.as_deref());
    query.scalar_str("didType", filter.did_type.as_deref());
    query.flag("showEmpty", filter.show_empty);
    query.finish()
}

pub(crate) fn did_query(filter: &DidFilter, defaults: Pagination) -> String {
    let mut query = QueryBuilder::new(filter.pagination, defaults);
    query.repeated(DidId::FIELD, &filter.did_ids);
    // The vendor spells this parameter with a lowercase "g", unlike the
    // didgroup endpoint's own "didGroupIds".
    query.repeated("didgroupIds", &filter.did_group_ids);
    query.scalar_str("e164Pattern", filter.e164_pattern.as_deref());
    query.scalar_num("regulationAddressId", filter.regulation_address_id);
    query.scalar_num("voiceUriId", filter.voice_uri_id);
    query.scalar_num("faxUriId", filter.fax_uri_id);
    query.scalar_num("smsLinkGroupId", filter.sms_link_group_id);
    query.flag("needAddressLink", filter.need_address_link);
    query.scalar_str("serviceType", filter.service_type.as_deref());
    query.scalar_str(
        CountryCode::FIELD,
        filter.country_code.as_ref().map(CountryCode::as_str),
    );
    query.scalar_str(
        OrderReference::FIELD,
        filter.order_reference.as_ref().map(|r| r.as_str()),
    );
    query.scalar_str("portingReference", filter.porting_reference.as_deref());
    query.scalar_num("deliveryId", filter.delivery_id);
    query.flag("smsOutbound", filter.sms_outbound);
    query.flag("webRtcEnabled", filter.web_rtc_enabled);
    query.finish()
}

pub(crate) fn country_query(filter: &CountryFilter, defaults: Pagination) -> String {
    let mut query = QueryBuilder::new(filter.pagination, defaults);
    query.scalar_str(
        CountryCode::FIELD,
        filter.country_code.as_ref().map(CountryCode::as_str),
    );
    query.scalar_str("didType", filter.did_type.as_deref());
    query.finish()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidGroupsJsonResponse {
    #[serde(default)]
    did_groups: Option<Vec<DidGroupJson>>,
    #[serde(default)]
    result_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidGroupJson {
    did_group_id: u64,
    #[serde(default)]
    country_code_a3: Option<String>,
    #[serde(default)]
    state_id: Option<u64>,
    #[serde(default)]
    did_type: Option<String>,
    #[serde(default)]
    city_name: Option<String>,
    #[serde(default)]
    area_code: Option<String>,
    #[serde(default)]
    stock: u64,
    #[serde(default)]
    available: bool,
    #[serde(default, rename = "setup100")]
    setup_100: Option<u64>,
    #[serde(default, rename = "monthly100")]
    monthly_100: Option<u64>,
    #[serde(default)]
    features: Vec<FeatureJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureJson {
    feature_id: u32,
    #[serde(default)]
    name: Option<String>,
}

impl From<DidGroupJson> for DidGroup {
    fn from(value: DidGroupJson) -> Self {
        Self {
            did_group_id: DidGroupId::new(value.did_group_id),
            country_code_a3: value.country_code_a3,
            state_id: value.state_id,
            did_type: value.did_type,
            city_name: value.city_name,
            area_code: value.area_code,
            stock: value.stock,
            available: value.available,
            setup_100: value.setup_100,
            monthly_100: value.monthly_100,
            features: value
                .features
                .into_iter()
                .map(|feature| Feature {
                    feature_id: FeatureId::new(feature.feature_id),
                    name: feature.name,
                })
                .collect(),
        }
    }
}

pub(crate) fn decode_did_groups_response(body: &str) -> Result<DidGroupsResponse, TransportError> {
    let parsed: DidGroupsJsonResponse = serde_json::from_str(body)?;
    Ok(DidGroupsResponse {
        did_groups: parsed
            .did_groups
            .map(|groups| groups.into_iter().map(DidGroup::from).collect()),
        result_count: parsed.result_count,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidsJsonResponse {
    #[serde(default)]
    dids: Vec<DidJson>,
    #[serde(default)]
    result_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DidJson {
    did_id: u64,
    #[serde(default)]
    e164: Option<String>,
    #[serde(default)]
    did_group_id: Option<u64>,
    #[serde(default)]
    country_code_a3: Option<String>,
    #[serde(default)]
    city_name: Option<String>,
    #[serde(default)]
    area_code: Option<String>,
    #[serde(default)]
    order_reference: Option<String>,
    #[serde(default)]
    delivery_id: Option<u64>,
}

pub(crate) fn decode_dids_response(body: &str) -> Result<DidsResponse, TransportError> {
    let parsed: DidsJsonResponse = serde_json::from_str(body)?;
    Ok(DidsResponse {
        dids: parsed
            .dids
            .into_iter()
            .map(|did| Did {
                did_id: DidId::new(did.did_id),
                e164: did.e164,
                did_group_id: did.did_group_id.map(DidGroupId::new),
                country_code_a3: did.country_code_a3,
                city_name: did.city_name,
                area_code: did.area_code,
                order_reference: did.order_reference,
                delivery_id: did.delivery_id,
            })
            .collect(),
        result_count: parsed.result_count,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountriesJsonResponse {
    #[serde(default)]
    countries: Vec<CountryJson>,
    #[serde(default)]
    result_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryJson {
    country_code_a3: String,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    has_states: bool,
}

pub(crate) fn decode_countries_response(body: &str) -> Result<CountriesResponse, TransportError> {
    let parsed: CountriesJsonResponse = serde_json::from_str(body)?;
    Ok(CountriesResponse {
        countries: parsed
            .countries
            .into_iter()
            .map(|country| Country {
                country_code_a3: country.country_code_a3,
                country_name: country.country_name,
                has_states: country.has_states,
            })
            .collect(),
        result_count: parsed.result_count,
    })
}
