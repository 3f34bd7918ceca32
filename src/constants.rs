//! Application constants for the PubChem processor
//!
//! This module contains the static configuration tables used throughout the
//! processor: the PubChem property heading table, the condition key registry
//! data, and the default text-normalization lists. All tables are read-only
//! and consumed at pipeline construction time.

// =============================================================================
// File Patterns
// =============================================================================

/// File name pattern for downloaded PubChem record files
pub const RECORD_FILE_PATTERN: &str = "cid_";

/// File extension for downloaded PubChem record files
pub const RECORD_FILE_EXTENSION: &str = "json";

/// Default output file name for extracted records
pub const DEFAULT_OUTPUT_FILE: &str = "chemicals.jsonl";

// =============================================================================
// Property Heading Table
// =============================================================================

/// One row of the PubChem property heading table
///
/// Maps a PubChem `TOCHeading` to the key the property is stored under,
/// whether quantity parsing should be attempted, and the unit policy for
/// the parsed value.
#[derive(Debug, Clone, Copy)]
pub struct PropertyMapping {
    /// Section heading as it appears in PubChem records
    pub heading: &'static str,
    /// Key the property is stored under in the output record
    pub key: &'static str,
    /// Whether the field should go through the quantity pipeline
    pub expects_quantity: bool,
    /// Unit the final quantity is converted to, when declared
    pub canonical_unit: Option<&'static str>,
    /// Unit assigned to dimensionless values, when declared
    pub assumed_unit: Option<&'static str>,
}

impl PropertyMapping {
    const fn text(heading: &'static str, key: &'static str) -> Self {
        Self {
            heading,
            key,
            expects_quantity: false,
            canonical_unit: None,
            assumed_unit: None,
        }
    }

    const fn quantity(
        heading: &'static str,
        key: &'static str,
        canonical_unit: Option<&'static str>,
    ) -> Self {
        Self {
            heading,
            key,
            expects_quantity: true,
            canonical_unit,
            assumed_unit: None,
        }
    }
}

/// Property headings extracted from PubChem experimental property sections
///
/// Temperatures normalize to kelvin. Density keeps the g/ml convention of the
/// source corpus and doubles as the assumed unit for bare dimensionless
/// density values. Pressure-like properties are left in their reported units
/// because multi-condition vapor pressure series are more useful unconverted.
pub const PROPERTY_MAPPINGS: &[PropertyMapping] = &[
    PropertyMapping::text("Color/Form", "color"),
    PropertyMapping::text("Taste", "taste"),
    PropertyMapping::text("Polymerization", "polymerization"),
    PropertyMapping::text("Physical Description", "physical_description"),
    PropertyMapping::text("Odor", "odor"),
    PropertyMapping::text("Solubility", "solubility"),
    PropertyMapping::text("Stability/Shelf Life", "stability"),
    PropertyMapping::text("Decomposition", "decomposition"),
    PropertyMapping::text("Corrosivity", "corrosivity"),
    PropertyMapping::quantity("Kovats Retention Index", "kovats_index", None),
    PropertyMapping::quantity("Odor Threshold", "odor_threshold", None),
    PropertyMapping {
        heading: "Density",
        key: "density",
        expects_quantity: true,
        canonical_unit: Some("g/ml"),
        assumed_unit: Some("g/ml"),
    },
    PropertyMapping::quantity("Boiling Point", "temp_boil", Some("K")),
    PropertyMapping::quantity("Melting Point", "temp_melt", Some("K")),
    PropertyMapping::quantity("Viscosity", "viscosity", None),
    PropertyMapping::quantity("Vapor Pressure", "vapor_pres", None),
    PropertyMapping::quantity("Vapor Density", "vapor_density", None),
    PropertyMapping::quantity("Flash Point", "temp_flash", Some("K")),
    PropertyMapping::quantity("Autoignition Temperature", "temp_autoignition", Some("K")),
    PropertyMapping::quantity("Heat of Combustion", "heat_combustion", None),
    PropertyMapping::quantity("Heat of Vaporization", "heat_vaporization", None),
    PropertyMapping::quantity("Surface Tension", "surface_tension", None),
    PropertyMapping::quantity("Refractive Index", "refract_index", None),
    PropertyMapping::quantity("LogP", "log_p", None),
    PropertyMapping::quantity("pKa", "pka", None),
    PropertyMapping::quantity("LogS", "log_s", None),
    PropertyMapping::quantity("LogKoa", "log_koa", None),
    PropertyMapping::quantity("pH", "ph", None),
    PropertyMapping::quantity("Henrys Law Constant", "henry_constant", None),
    PropertyMapping::quantity("Optical Rotation", "optical_rot", None),
    PropertyMapping::quantity("Ionization Potential", "ionization_potential", None),
    PropertyMapping::quantity("Dissociation Constants", "dissociation_constants", None),
    PropertyMapping::quantity("Atmospheric OH Rate Constant", "atm_oh_rate_constant", None),
];

// =============================================================================
// Identity Headings
// =============================================================================

/// One row of the PubChem identity heading table
#[derive(Debug, Clone, Copy)]
pub struct IdentityMapping {
    /// Section heading as it appears in PubChem records
    pub heading: &'static str,
    /// Key the identifier is stored under
    pub key: &'static str,
}

/// Identity headings extracted from PubChem records
///
/// CID, preferred name and synonyms have dedicated handling in the record
/// extractor and do not appear here.
pub const IDENTITY_MAPPINGS: &[IdentityMapping] = &[
    IdentityMapping {
        heading: "InChI",
        key: "inchi",
    },
    IdentityMapping {
        heading: "InChI Key",
        key: "inchi_key",
    },
    IdentityMapping {
        heading: "Canonical SMILES",
        key: "smiles",
    },
    IdentityMapping {
        heading: "Molecular Formula",
        key: "chem_formula",
    },
    IdentityMapping {
        heading: "CAS",
        key: "cas",
    },
];

/// Section heading holding depositor-supplied synonyms
pub const SYNONYMS_HEADING: &str = "Depositor-Supplied Synonyms";

/// Maximum synonyms collected from the record before cleanup
pub const SYNONYM_COLLECT_LIMIT: usize = 8;

/// Maximum synonyms kept after cleanup
pub const SYNONYM_KEEP_LIMIT: usize = 5;

// =============================================================================
// Condition Keys
// =============================================================================

/// One entry of the condition key registry
///
/// Each key declares exactly one expected physical dimension via its SI unit
/// expression. Matching a resolved condition value against the registry is
/// done purely by dimensionality (first match in table order wins).
#[derive(Debug, Clone, Copy)]
pub struct ConditionKeyDef {
    /// Condition key name
    pub key: &'static str,
    /// SI unit expression declaring the expected dimension
    pub unit: &'static str,
}

/// Closed vocabulary of environmental condition keys
pub const CONDITION_KEYS: &[ConditionKeyDef] = &[
    ConditionKeyDef { key: "time", unit: "s" },
    ConditionKeyDef { key: "temp", unit: "K" },
    ConditionKeyDef { key: "pres", unit: "Pa" },
    // Light power hitting a surface, not electrical power
    ConditionKeyDef { key: "light_power", unit: "W" },
    // Electric power driving the light; same dimension as light_power, so
    // reachable only through the explicit-key API
    ConditionKeyDef { key: "light_power_e", unit: "W" },
    ConditionKeyDef { key: "light_irradiance", unit: "W/m2" },
    // Peak wavelength
    ConditionKeyDef { key: "light_wlength", unit: "m" },
    // Stirrer rate
    ConditionKeyDef { key: "stirring", unit: "Hz" },
    ConditionKeyDef { key: "potential", unit: "V" },
];

/// Prefix marking a free-form, non-registry condition key
pub const CUSTOM_CONDITION_PREFIX: &str = "x_";

// =============================================================================
// Text Normalization Defaults
// =============================================================================

/// Noise phrases deleted outright before parsing
///
/// Citation tags, measurement-method qualifiers and similar vocabulary
/// observed in the PubChem corpus. Other data sources supply their own list
/// through `NormalizerConfig`.
pub const DEFAULT_REMOVE_PHRASES: &[&str] = &[
    "(NTP, 1992)",
    "(USCG, 1999)",
    "USCG, 1999",
    "EPA, 1998",
    "NIOSH, 2016",
    "approximate",
    "approx.",
    "approx",
    "(closed cup)",
    "(Closed cup)",
    "closed cup",
    "Closed cup",
    "(open cup)",
    "(Open cup)",
    "open cup",
    "Open cup",
    "c.c.",
];

/// Ordered symbol substitutions applied before parsing
///
/// Patterns are regular expressions. Order matters: mojibake degree signs are
/// repaired before degree signs are rewritten to `deg`, and the Unicode minus
/// is rewritten before any numeric matching happens downstream.
pub const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("@", " at "),
    ("Â°", "°"),
    ("\u{2212}", "-"),
    ("°", " deg"),
    ("MM HG", "mmHg"),
    ("CAL/G", "cal/g"),
    ("%", ""),
];

/// Pattern stripping leading non-numeric descriptive text (labels such as
/// "Vapor pressure, kPa at 20 degC:")
pub const LEADING_TEXT_PATTERN: &str = "^[a-zA-Z;,.: /]*";

// =============================================================================
// Identity Cleanup
// =============================================================================

/// Pattern matching CAS-number-looking synonyms (dropped during cleanup)
pub const CAS_LIKE_PATTERN: &str = r"([0-9]+-[0-9]+-[0-9]+)|([0-9]{3})";

/// Prefix stripped from InChI identifier strings
pub const INCHI_PREFIX: &str = "InChI=";
