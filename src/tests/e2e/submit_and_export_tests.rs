use crate::modules::volunteer_log::core::csv_export::CsvQuoting;
use crate::modules::volunteer_log::use_cases::export_month::handler::export_month;
use crate::modules::volunteer_log::use_cases::load_entries::handler::LoadEntriesHandler;
use crate::shared::infrastructure::entry_store::in_memory::InMemoryEntryStore;
use crate::shared::infrastructure::remote_mirror::in_memory::InMemoryRemoteMirror;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::submit_entry::SubmitEntryBuilder;
use std::sync::Arc;
use std::time::Duration;

const MIXED_SLOT: &str = r#"[
    {"First Name":"Old","Last Name":"Timer","Day Worked":"2023-11-20","Number of Hours Worked":"2","Task Type":"Gardening","Other":"","Month":"November","Year":2023},
    {"First Name":"X","Last Name":"Y","Day Worked":"undefined","Number of Hours Worked":1,"Task Type":"Cleanup","Other":""},
    {"First Name":"A","Last Name":"B","Day Worked":"2024-03-05","Number of Hours Worked":3,"Task Type":"Cleanup","Other":"","Timestamp":"2024-03-05T10:00:00.000Z","groupKey":"2024-March"}
]"#;

#[tokio::test]
async fn loads_submits_groups_and_exports() {
    let store = Arc::new(InMemoryEntryStore::with_contents(MIXED_SLOT));
    let mirror = Arc::new(InMemoryRemoteMirror::new());

    let loaded = LoadEntriesHandler::new(store.clone()).handle().await.unwrap();
    assert_eq!(loaded.collection.len(), 2);
    assert_eq!(loaded.dropped.len(), 1);
    assert_eq!(loaded.dropped[0].position, 1);

    let state = AppState::new(
        loaded.collection,
        store.clone(),
        mirror.clone(),
        CsvQuoting::Standard,
        Duration::from_secs(2),
    );

    for (first_name, date) in [("C", "2024-03-18"), ("D", "2024-04-02")] {
        state
            .submit(
                SubmitEntryBuilder::new()
                    .first_name(first_name)
                    .date_worked(date)
                    .build(),
            )
            .await
            .unwrap();
    }
    assert_eq!(mirror.published_count().await, 2);

    let groups = state.monthly_groups().await;
    let keys: Vec<&str> = groups.keys().collect();
    assert_eq!(keys, vec!["2023-November", "2024-March", "2024-April"]);
    assert_eq!(
        groups.chronological_keys(),
        vec!["2023-November", "2024-March", "2024-April"]
    );

    let march = export_month(&groups, Some("2024-March"), CsvQuoting::Standard).unwrap();
    assert_eq!(march.file_name, "volunteer_log_2024-March.csv");
    let rows: Vec<&str> = march.content.lines().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], "A,B,2024-03-05,March,2024,3,Cleanup,");
    assert_eq!(rows[2], "C,B,2024-03-18,March,2024,3,Cleanup,");

    let november = export_month(&groups, Some("2023-November"), CsvQuoting::Standard).unwrap();
    assert_eq!(
        november.content.lines().nth(1),
        Some("Old,Timer,2023-11-20,November,2023,2,Gardening,")
    );

    let reloaded = LoadEntriesHandler::new(store).handle().await.unwrap();
    assert_eq!(reloaded.collection, state.snapshot().await);
    assert!(reloaded.dropped.is_empty());
}
