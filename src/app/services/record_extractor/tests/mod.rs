//! Tests for the record extractor module

pub mod identity_tests;

use serde_json::{json, Value};

/// Create a minimal pug_view document covering identity and property sections
pub fn create_test_document() -> Value {
    json!({
        "Record": {
            "RecordType": "CID",
            "RecordNumber": 962,
            "RecordTitle": "Water",
            "Section": [
                {
                    "TOCHeading": "Names and Identifiers",
                    "Section": [
                        {
                            "TOCHeading": "Computed Descriptors",
                            "Section": [
                                {
                                    "TOCHeading": "InChI",
                                    "Information": [
                                        { "Value": { "StringWithMarkup": [
                                            { "String": "InChI=1S/H2O/h1H2" }
                                        ] } }
                                    ]
                                },
                                {
                                    "TOCHeading": "Canonical SMILES",
                                    "Information": [
                                        { "Value": { "StringWithMarkup": [
                                            { "String": "O" }
                                        ] } }
                                    ]
                                }
                            ]
                        },
                        {
                            "TOCHeading": "Molecular Formula",
                            "Information": [
                                { "Value": { "StringWithMarkup": [
                                    { "String": "H2O" }
                                ] } },
                                { "Value": { "StringWithMarkup": [
                                    { "String": "H2O" }
                                ] } }
                            ]
                        },
                        {
                            "TOCHeading": "CAS",
                            "Information": [
                                { "Value": { "StringWithMarkup": [
                                    { "String": "7732-18-5" }
                                ] } }
                            ]
                        },
                        {
                            "TOCHeading": "Depositor-Supplied Synonyms",
                            "Information": [
                                { "Value": { "StringWithMarkup": [
                                    { "String": "water" },
                                    { "String": "WATER" },
                                    { "String": "7732-18-5" },
                                    { "String": "Distilled water" },
                                    { "String": "dihydrogen oxide" }
                                ] } }
                            ]
                        }
                    ]
                },
                {
                    "TOCHeading": "Chemical and Physical Properties",
                    "Section": [
                        {
                            "TOCHeading": "Experimental Properties",
                            "Section": [
                                {
                                    "TOCHeading": "Color/Form",
                                    "Information": [
                                        { "Value": { "StringWithMarkup": [
                                            { "String": "Colorless liquid" }
                                        ] } }
                                    ]
                                },
                                {
                                    "TOCHeading": "Density",
                                    "Information": [
                                        { "Value": { "StringWithMarkup": [
                                            { "String": "1.000 at 4 °C" }
                                        ] } }
                                    ]
                                },
                                {
                                    "TOCHeading": "Boiling Point",
                                    "Information": [
                                        { "Value": { "StringWithMarkup": [
                                            { "String": "100 °C" }
                                        ] } }
                                    ]
                                },
                                {
                                    "TOCHeading": "Vapor Pressure",
                                    "Information": [
                                        { "Value": {
                                            "Number": [17.5],
                                            "Unit": "mmHg"
                                        } }
                                    ]
                                }
                            ]
                        }
                    ]
                }
            ]
        }
    })
}
