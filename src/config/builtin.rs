//! Compiled-in reference data.
//!
//! The historical legal interest rates (art. 1284 c.c.) and the tax codes most
//! commonly remediated. `config/it/` ships the same data as YAML.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{InterestRate, InterestRateTable, TaxCategory, TaxCode};

/// (year, rate in hundredths of a percent, decree)
const HISTORICAL_RATES: [(i32, i64, &str); 27] = [
    (2000, 350, "D.M. 11 dicembre 1999"),
    (2001, 350, "D.M. 11 dicembre 1999"),
    (2002, 300, "D.M. 11 dicembre 2001"),
    (2003, 250, "D.M. 1 febbraio 2003"),
    (2004, 250, "D.M. 1 febbraio 2003"),
    (2005, 250, "D.M. 1 febbraio 2003"),
    (2006, 250, "D.M. 1 febbraio 2003"),
    (2007, 250, "D.M. 1 febbraio 2003"),
    (2008, 300, "D.M. 12 dicembre 2007"),
    (2009, 100, "D.M. 4 dicembre 2008"),
    (2010, 100, "D.M. 4 dicembre 2009"),
    (2011, 150, "D.M. 7 dicembre 2010"),
    (2012, 250, "D.M. 12 dicembre 2011"),
    (2013, 250, "D.M. 12 dicembre 2011"),
    (2014, 100, "D.M. 12 dicembre 2013"),
    (2015, 50, "D.M. 11 dicembre 2014"),
    (2016, 20, "D.M. 11 dicembre 2015"),
    (2017, 10, "D.M. 7 dicembre 2016"),
    (2018, 30, "D.M. 13 dicembre 2017"),
    (2019, 80, "D.M. 12 dicembre 2018"),
    (2020, 5, "D.M. 12 dicembre 2019"),
    (2021, 1, "D.M. 11 dicembre 2020"),
    (2022, 125, "D.M. 13 dicembre 2021"),
    (2023, 500, "D.M. 13 dicembre 2022"),
    (2024, 250, "D.M. 29 novembre 2023"),
    (2025, 200, "D.M. 10 dicembre 2024"),
    (2026, 160, "D.M. MEF 10 dicembre 2025 - G.U. 13/12/2025"),
];

/// The latest year has no end date until the next decree is published.
const OPEN_ENDED_YEAR: i32 = 2026;

static INTEREST_RATE_TABLE: LazyLock<InterestRateTable> = LazyLock::new(|| {
    let entries = HISTORICAL_RATES
        .iter()
        .filter_map(|&(year, hundredths, decree)| {
            Some(InterestRate {
                year,
                rate_percent: Decimal::new(hundredths, 2),
                effective_from: NaiveDate::from_ymd_opt(year, 1, 1)?,
                effective_to: if year == OPEN_ENDED_YEAR {
                    None
                } else {
                    NaiveDate::from_ymd_opt(year, 12, 31)
                },
                legal_reference: decree.to_string(),
                gazette: None,
                notes: None,
            })
        })
        .collect();

    InterestRateTable::from_sorted(entries)
});

pub(super) fn interest_rate_table() -> &'static InterestRateTable {
    &INTEREST_RATE_TABLE
}

/// (code, name, category, F24 section)
const TAX_CODES: [(&str, &str, TaxCategory, &str); 23] = [
    ("4001", "IRPEF saldo", TaxCategory::Irpef, "ERARIO"),
    ("4033", "IRPEF acconto prima rata", TaxCategory::Irpef, "ERARIO"),
    ("4034", "IRPEF acconto seconda rata o unica", TaxCategory::Irpef, "ERARIO"),
    ("6001", "IVA mensile gennaio", TaxCategory::Iva, "ERARIO"),
    ("6002", "IVA mensile febbraio", TaxCategory::Iva, "ERARIO"),
    ("6003", "IVA mensile marzo", TaxCategory::Iva, "ERARIO"),
    ("6004", "IVA mensile aprile", TaxCategory::Iva, "ERARIO"),
    ("6005", "IVA mensile maggio", TaxCategory::Iva, "ERARIO"),
    ("6006", "IVA mensile giugno", TaxCategory::Iva, "ERARIO"),
    ("6007", "IVA mensile luglio", TaxCategory::Iva, "ERARIO"),
    ("6008", "IVA mensile agosto", TaxCategory::Iva, "ERARIO"),
    ("6009", "IVA mensile settembre", TaxCategory::Iva, "ERARIO"),
    ("6010", "IVA mensile ottobre", TaxCategory::Iva, "ERARIO"),
    ("6011", "IVA mensile novembre", TaxCategory::Iva, "ERARIO"),
    ("6012", "IVA mensile dicembre", TaxCategory::Iva, "ERARIO"),
    ("6031", "IVA trimestrale 1° trimestre", TaxCategory::Iva, "ERARIO"),
    ("6032", "IVA trimestrale 2° trimestre", TaxCategory::Iva, "ERARIO"),
    ("6033", "IVA trimestrale 3° trimestre", TaxCategory::Iva, "ERARIO"),
    ("3812", "IRAP saldo", TaxCategory::Irap, "REGIONI"),
    ("3813", "IRAP acconto prima rata", TaxCategory::Irap, "REGIONI"),
    ("3843", "IRAP acconto seconda rata", TaxCategory::Irap, "REGIONI"),
    ("3800", "IMU abitazione principale", TaxCategory::Imu, "ICI_IMU"),
    ("3918", "IMU altri fabbricati", TaxCategory::Imu, "ICI_IMU"),
];

/// Returns the compiled-in tax-code catalog.
pub fn tax_codes() -> Vec<TaxCode> {
    TAX_CODES
        .iter()
        .map(|&(code, name, category, section)| TaxCode {
            code: code.to_string(),
            name: name.to_string(),
            category,
            description: Some(name.to_string()),
            f24_section: section.to_string(),
            active: true,
        })
        .collect()
}
