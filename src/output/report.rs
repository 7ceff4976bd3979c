// src/output/report.rs

use crate::core_types::Summary;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// Writes the summary report: one line per location, one indented
/// `dish: count` line per dish, and a blank line after every location block.
///
/// Locations and dishes appear in first-seen order, mirroring the order the
/// photos were processed in. An empty summary writes nothing, so a run over
/// an empty source regenerates an empty report.
pub fn write_summary(writer: &mut dyn Write, summary: &Summary) -> Result<()> {
    debug!(
        "Writing summary for {} location(s)...",
        summary.locations().len()
    );
    for location in summary.locations() {
        writeln!(writer, "{}", location.name)?;
        for dish in location.dishes() {
            writeln!(writer, "  {}: {}", dish.name, dish.count)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_summary_writes_nothing() -> Result<()> {
        let summary = Summary::new();
        let mut writer = Cursor::new(Vec::new());
        write_summary(&mut writer, &summary)?;

        assert!(writer.into_inner().is_empty());
        Ok(())
    }

    #[test]
    fn test_single_location_block() -> Result<()> {
        let mut summary = Summary::new();
        summary.record("教工餐厅一层", "西红柿炒鸡蛋");
        summary.record("教工餐厅一层", "西红柿炒鸡蛋");
        summary.record("教工餐厅一层", "土豆丝");

        let mut writer = Cursor::new(Vec::new());
        write_summary(&mut writer, &summary)?;

        let output = String::from_utf8(writer.into_inner())?;
        let expected = "教工餐厅一层\n  西红柿炒鸡蛋: 2\n  土豆丝: 1\n\n";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_locations_keep_first_seen_order() -> Result<()> {
        let mut summary = Summary::new();
        summary.record("Zeta Hall", "noodles");
        summary.record("Alpha Hall", "rice");
        summary.record("Zeta Hall", "noodles");

        let mut writer = Cursor::new(Vec::new());
        write_summary(&mut writer, &summary)?;

        let output = String::from_utf8(writer.into_inner())?;
        let expected = "Zeta Hall\n  noodles: 2\n\nAlpha Hall\n  rice: 1\n\n";
        assert_eq!(output, expected);
        Ok(())
    }
}
