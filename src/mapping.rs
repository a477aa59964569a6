//! The fixed column table of the Scottish EPC export.
use crate::Row;

/// Source column of the registry export and the name it takes in the output,
/// in output order.
pub const SCOTTISH_EPC_COLUMNS: &[(&str, &str)] = &[
    ("OSG_REFERENCE_NUMBER", "uprn"),
    ("CURRENT_ENERGY_RATING", "rating"),
    ("LODGEMENT_DATE", "date"),
    ("PROPERTY_TYPE", "property_type"),
    ("ADDRESS1", "address1"),
    ("ADDRESS2", "address2"),
    ("ADDRESS3", "address3"),
    ("POSTCODE", "postcode"),
    ("BUILDING_REFERENCE_NUMBER", "building_reference_number"),
    ("POTENTIAL_ENERGY_RATING", "potential_rating"),
    ("CURRENT_ENERGY_EFFICIENCY", "current_energy_efficiency_rating"),
    ("POTENTIAL_ENERGY_EFFICIENCY", "potential_energy_efficiency_rating"),
    ("BUILT_FORM", "built_form"),
    ("INSPECTION_DATE", "inspection_date"),
    ("LOCAL_AUTHORITY_LABEL", "local_authority"),
    ("CONSTITUENCY_LABEL", "constituency"),
    ("ENERGY_CONSUMPTION_CURRENT", "energy_consumption"),
    ("ENERGY_CONSUMPTION_POTENTIAL", "potential_energy_consumption"),
    ("CO2_EMISSIONS_CURRENT", "co2_emissions"),
    ("CO2_EMISS_CURR_PER_FLOOR_AREA", "co2_emissions_per_floor_area"),
    ("CO2_EMISSIONS_POTENTIAL", "co2_emissions_potential"),
    ("TOTAL_FLOOR_AREA", "floor_area"),
    ("FLOOR_LEVEL", "floor_level"),
    ("FLOOR_HEIGHT", "floor_height"),
    ("ENERGY_TARIFF", "energy_tariff"),
    ("MAINS_GAS_FLAG", "mains_gas"),
    ("MULTI_GLAZE_PROPORTION", "multiple_glazed_proportion"),
    ("EXTENSION_COUNT", "extension_count"),
    ("NUMBER_HABITABLE_ROOMS", "habitable_room_count"),
    ("NUMBER_HEATED_ROOMS", "heated_room_count"),
    ("FLOOR_DESCRIPTION", "floor_description"),
    ("FLOOR_ENERGY_EFF", "floor_energy_efficiency"),
    ("WINDOWS_DESCRIPTION", "windows_description"),
    ("WALL_DESCRIPTION", "wall_description"),
    ("WALL_ENERGY_EFF", "wall_energy_efficiency"),
    ("WALL_ENV_EFF", "wall_environmental_efficiency"),
    ("MAINHEAT_DESCRIPTION", "main_heating_description"),
    ("MAINHEAT_ENERGY_EFF", "main_heating_energy_efficiency"),
    ("MAINHEAT_ENV_EFF", "main_heating_environmental_efficiency"),
    ("MAIN_FUEL", "main_heating_fuel_type"),
    ("SECONDHEAT_DESCRIPTION", "second_heating_description"),
    ("SHEATING_ENERGY_EFF", "second_heating_energy_efficiency"),
    ("ROOF_DESCRIPTION", "roof_description"),
    ("ROOF_ENERGY_EFF", "roof_energy_efficiency"),
    ("ROOF_ENV_EFF", "roof_environmental_efficiency"),
    ("LIGHTING_DESCRIPTION", "lighting_description"),
    ("LIGHTING_ENERGY_EFF", "lighting_energy_efficiency"),
    ("LIGHTING_ENV_EFF", "lighting_environmental_efficiency"),
    ("MECHANICAL_VENTILATION", "mechanical_ventilation"),
    ("CONSTRUCTION_AGE_BAND", "construction_age_band"),
    ("TENURE", "tenure"),
    ("IMPROVEMENTS", "improvements"),
    ("ALTERNATIVE_IMPROVEMENTS", "alternative_improvements"),
];

/// An ordered projection from source column names to destination column
/// names. Order of the pairs is the order of the output columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    pairs: Vec<(String, String)>,
}

impl ColumnMapping {
    pub fn new<S, D>(pairs: Vec<(S, D)>) -> ColumnMapping
    where
        S: Into<String>,
        D: Into<String>,
    {
        ColumnMapping {
            pairs: pairs
                .into_iter()
                .map(|(s, d)| (s.into(), d.into()))
                .collect(),
        }
    }

    pub fn scottish_epc() -> ColumnMapping {
        ColumnMapping::new(SCOTTISH_EPC_COLUMNS.to_vec())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn source_keys_in_order(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(s, _)| s.as_str())
    }

    pub fn destination_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, d)| d.as_str())
    }

    /// First line of every output file. Names are written bare, not quoted.
    pub fn destination_header_line(&self) -> String {
        self.destination_names().collect::<Vec<_>>().join(",")
    }

    pub fn destination_row(&self) -> Row {
        self.destination_names().collect()
    }
}
