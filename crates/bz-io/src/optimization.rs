use std::io::BufRead;

use bz_core::ProfitMap;

use crate::error::IoError;

/// Header fields of an `.upit`/`.cpit`/`.pcpsp`-style optimization file.
/// Parsed for forward compatibility; only `OBJECTIVE_FUNCTION` is actually
/// consumed by [`parse_objective`] today.
#[derive(Debug, Clone, Default)]
pub struct OptimizationHeader {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub n_blocks: Option<usize>,
    pub n_periods: Option<usize>,
    pub n_destinations: Option<usize>,
    pub discount_rate: Option<f64>,
}

const KNOWN_SECTIONS: &[&str] = &[
    "OBJECTIVE_FUNCTION",
    "RESOURCE_CONSTRAINT_COEFFICIENTS",
    "RESOURCE_CONSTRAINT_LIMITS",
];

fn apply_header_field(header: &mut OptimizationHeader, key: &str, value: &str) {
    match key.to_ascii_uppercase().as_str() {
        "NAME" => header.name = Some(value.to_string()),
        "TYPE" => header.kind = Some(value.to_string()),
        "NBLOCKS" => header.n_blocks = value.parse().ok(),
        "NPERIODS" => header.n_periods = value.parse().ok(),
        "NDESTINATIONS" => header.n_destinations = value.parse().ok(),
        "DISCOUNT_RATE" => header.discount_rate = value.parse().ok(),
        _ => {}
    }
}

/// Parse the key-value header followed by sectioned data, returning only
/// the objective vector as a [`ProfitMap`]. `RESOURCE_CONSTRAINT_*` sections
/// are recognised (so they don't get mistaken for objective rows) but their
/// contents are discarded; this repository's core has no resource-limited
/// scheduling module to feed them to.
pub fn parse_objective(reader: impl BufRead) -> Result<ProfitMap, IoError> {
    let mut header = OptimizationHeader::default();
    let mut objective = Vec::new();
    let mut current_section: Option<&'static str> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let section_name = trimmed.trim_end_matches(':');
        if let Some(&known) = KNOWN_SECTIONS
            .iter()
            .find(|&&s| s.eq_ignore_ascii_case(section_name))
        {
            current_section = Some(known);
            continue;
        }

        match current_section {
            Some("OBJECTIVE_FUNCTION") => {
                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| IoError::parse(lineno + 1, "objective value is not a number"))?;
                objective.push(value);
            }
            Some(_) => {
                // Recognised but unused section; skip its rows.
            }
            None => {
                if let Some((key, value)) = trimmed.split_once(':').or_else(|| trimmed.split_once(' ')) {
                    apply_header_field(&mut header, key.trim(), value.trim());
                }
            }
        }
    }

    Ok(ProfitMap::from_vec(objective))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_header_and_objective_section() {
        let input = "\
NAME: demo
NBLOCKS: 3
OBJECTIVE_FUNCTION:
1.5
-2.0
3.25
RESOURCE_CONSTRAINT_LIMITS:
100
";
        let profits = parse_objective(Cursor::new(input)).unwrap();
        assert_eq!(profits.n_blocks(), 3);
        assert_eq!(profits.get(bz_core::BlockId::new(1)), -2.0);
    }
}
