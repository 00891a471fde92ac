use crate::modules::volunteer_log::core::csv_export::{CsvQuoting, ExportError, to_csv};
use crate::modules::volunteer_log::core::grouping::MonthlyGroups;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

/// Download name for a month. Stored keys are free text, so characters that
/// cannot sit inside a quoted header value or a path are replaced with `_`.
pub fn export_file_name(group_key: &str) -> String {
    let safe: String = group_key
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '"' | '\\' | '/') {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("volunteer_log_{safe}.csv")
}

/// Export the selected month. A missing or blank selection is `NoSelection`;
/// a key with no bucket is `EmptyGroup`.
pub fn export_month(
    groups: &MonthlyGroups,
    selection: Option<&str>,
    quoting: CsvQuoting,
) -> Result<CsvExport, ExportError> {
    let key = selection
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(ExportError::NoSelection)?;
    let entries = groups.get(key).ok_or(ExportError::EmptyGroup)?;
    let content = to_csv(entries, quoting)?;
    Ok(CsvExport {
        file_name: export_file_name(key),
        content,
    })
}

#[cfg(test)]
mod export_month_tests {
    use super::*;
    use crate::modules::volunteer_log::core::collection::EntryCollection;
    use crate::modules::volunteer_log::core::grouping::group_by_month;
    use crate::tests::fixtures::entries::entry::EntryBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn groups() -> MonthlyGroups {
        group_by_month(&EntryCollection::from(vec![
            EntryBuilder::new().build(),
            EntryBuilder::new().first_name("Z").group_key(Some("2024-April")).build(),
        ]))
    }

    #[rstest]
    fn it_should_export_the_selected_month(groups: MonthlyGroups) {
        let export = export_month(&groups, Some("2024-March"), CsvQuoting::Standard).unwrap();
        assert_eq!(export.file_name, "volunteer_log_2024-March.csv");
        assert_eq!(export.content.lines().count(), 2);
        assert_eq!(
            export.content.lines().nth(1),
            Some("A,B,2024-03-05,March,2024,3,Cleanup,")
        );
    }

    #[rstest]
    #[case("2024-March", "volunteer_log_2024-March.csv")]
    #[case("2024-\"Ma\u{1}rch", "volunteer_log_2024-_Ma_rch.csv")]
    #[case("a/b\\c\td", "volunteer_log_a_b_c_d.csv")]
    fn it_should_build_a_header_safe_file_name(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(export_file_name(key), expected);
    }

    #[rstest]
    fn it_should_export_a_stored_key_with_unsafe_characters() {
        let key = "2024-\"Ma\u{1}rch";
        let groups = group_by_month(&EntryCollection::from(vec![
            EntryBuilder::new().group_key(Some(key)).build(),
        ]));
        let export = export_month(&groups, Some(key), CsvQuoting::Standard).unwrap();
        assert_eq!(export.file_name, "volunteer_log_2024-_Ma_rch.csv");
        assert_eq!(export.content.lines().count(), 2);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn it_should_require_a_selection(groups: MonthlyGroups, #[case] selection: Option<&str>) {
        assert_eq!(
            export_month(&groups, selection, CsvQuoting::Standard),
            Err(ExportError::NoSelection)
        );
    }

    #[rstest]
    fn it_should_refuse_an_unknown_month(groups: MonthlyGroups) {
        assert_eq!(
            export_month(&groups, Some("1999-January"), CsvQuoting::Standard),
            Err(ExportError::EmptyGroup)
        );
    }
}
