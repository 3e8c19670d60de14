// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Column layout of the Garmin Connect activity export (Norwegian locale).
//!
//! The export is a fixed positional vendor schema. Only a handful of columns
//! feed the output record; they are addressed by position.

/// Header of the export, in column order.
pub const HEADER: &[&str] = &[
    "Aktivitetstype",
    "Dato",
    "Favoritt",
    "Tittel",
    "Distanse",
    "Totale kalorier",
    "Tid",
    "Gjennomsnittlig puls",
    "Makspuls",
    "Aerob treningseffekt",
    "Gjennomsnittlig frekvens for loping",
    "Maksimal frekvens for løping",
    "Gjennomsnittlig tempo",
    "Beste tempo",
    "Total stigning",
    "Totalt fall",
    "Gjennomsnittlig skrittlengde",
    "Gjennomsnittlig vertikalt forholdstall",
    "Gjennomsnittlig vertikal oscillasjon",
    "Gjennomsnittlig tid med bakkekontakt",
    "Gjennomsnittlig balanse for tid med bakkekontakt",
    "Training Stress Score®",
    "Gjennomsnittlig kraft",
    "Maksimal kraft",
    "Vanskelighetsgrad",
    "Flyt",
    "Gjennomsnittlig Swolf",
    "Gjennomsnittlig tempo for tak",
    "Totalt antall repetisjoner",
    "Dykketid",
    "Minimumstemperatur",
    "Overflateintervall",
    "Dekompresjon",
    "Beste rundetid",
    "Antall runder",
    "Makstemperatur",
    "Distanse",
    "Totalt fall",
    "Tid i bevegelse",
    "Medgått tid",
    "Minste høyde",
    "Maksimal høyde",
];

/// Aktivitetstype
pub const ACTIVITY_TYPE: usize = 0;
/// Dato ("YYYY-MM-DD HH:MM:SS")
pub const DATE: usize = 1;
/// Tittel
pub const TITLE: usize = 3;
/// Distanse (km)
pub const DISTANCE: usize = 4;
/// Totale kalorier
pub const CALORIES: usize = 5;
/// Tid ("HH:MM:SS")
pub const DURATION: usize = 6;
/// Makspuls
pub const MAX_HEART_RATE: usize = 8;
/// Gjennomsnittlig frekvens for løping (steps per minute, both feet)
pub const AVG_RUN_CADENCE: usize = 10;
/// Gjennomsnittlig tempo ("MM:SS" per km)
pub const AVG_PACE: usize = 12;
/// Total stigning
pub const TOTAL_ASCENT: usize = 14;
/// Totalt fall
pub const TOTAL_DESCENT: usize = 15;

/// Minimum number of fields a data row needs to reach every consumed column.
pub const MIN_FIELDS: usize = TOTAL_DESCENT + 1;

/// Activity type label the export uses for running.
pub const RUNNING_LABEL: &str = "Løping";
