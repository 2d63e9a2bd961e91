use std::fmt::{Display, Formatter};

use crate::{decay::Decay, prelude::*, quantity::mass::Milligrams};

/// Caffeine consumed and what is left of it over the following hours.
#[must_use]
pub struct Report {
    pub consumed: Milligrams,
    pub rows: Vec<(u32, Milligrams)>,
}

impl Report {
    #[instrument(skip_all, fields(consumed = %consumed))]
    pub fn new(consumed: Milligrams) -> Self {
        let rows: Vec<_> = Decay::new(consumed).collect();
        debug!(n_rows = rows.len(), "computed");
        Self { consumed, rows }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Caffeine consumed (mg): {:.0}", self.consumed.0)?;
        writeln!(f)?;
        writeln!(f, "{:>2}{:>15}", "After Hour", "mg caffeine")?;
        for (hour, remaining) in &self.rows {
            writeln!(f, "{hour:>3}{:>18.1}", remaining.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::cups::Cups;

    fn render(cups: i64) -> Result<String> {
        Ok(Report::new(Cups(cups).caffeine()?).to_string())
    }

    #[test]
    fn test_one_cup() -> Result {
        let rendered = render(1)?;
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Caffeine consumed (mg): 130");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "After Hour    mg caffeine");
        assert_eq!(lines[3], "  1             113.1");
        assert_eq!(lines[4], "  2              98.4");
        assert_eq!(lines[26], " 24               4.6");
        Ok(())
    }

    #[test]
    fn test_zero_cups() -> Result {
        let rendered = render(0)?;
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Caffeine consumed (mg): 0"));
        let rows: Vec<&str> = lines.skip(2).collect();
        assert_eq!(rows.len(), 24);
        assert!(rows.iter().all(|row| row.ends_with(" 0.0")));
        Ok(())
    }

    #[test]
    fn test_two_cups_last_hour() -> Result {
        let rendered = render(2)?;
        assert!(rendered.starts_with("Caffeine consumed (mg): 260\n"));
        assert_eq!(rendered.lines().last(), Some(" 24               9.2"));
        Ok(())
    }

    #[test]
    fn test_row_count_and_widths() -> Result {
        for cups in [-3, 0, 1, 2, 10_000] {
            let rendered = render(cups)?;
            let rows: Vec<&str> = rendered.lines().skip(3).collect();
            assert_eq!(rows.len(), 24, "{cups}");
            for (index, row) in rows.iter().enumerate() {
                assert!(row.len() >= 21, "{row:?}");
                assert_eq!(row[..3].trim_start(), (index + 1).to_string());
            }
        }
        Ok(())
    }

    #[test]
    fn test_negative_cups() -> Result {
        let rendered = render(-1)?;
        assert!(rendered.starts_with("Caffeine consumed (mg): -130\n"));
        assert!(rendered.contains("  1            -113.1\n"));
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result {
        assert_eq!(render(3)?, render(3)?);
        Ok(())
    }

    #[test]
    fn test_ends_with_newline() -> Result {
        assert!(render(1)?.ends_with('\n'));
        Ok(())
    }
}
