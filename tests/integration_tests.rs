use anyhow::Result;
use fixlet_manager::config::toml_config::TomlConfig;
use fixlet_manager::{
    AppConfig, Fixlet, FixletLoader, FixletStore, LocalStorage, Session, SortField,
};
use std::io::Cursor;
use tempfile::TempDir;

const CSV: &str = "SiteID,FxiletID,Name,Criticality,RelevantComputerCount
site-2,2001,Patch123,High,17
site-1,2002,Patch456,Critical,3
site-3,2003,Patch123,Low,250
";

fn write_fixture(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("fixlets.csv");
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn load(content: &str) -> Result<FixletStore> {
    let dir = TempDir::new()?;
    let path = write_fixture(&dir, content);
    let config = AppConfig::from_settings(path, &TomlConfig::default())?;
    let loader = FixletLoader::new(LocalStorage::default(), config);

    let mut store = FixletStore::new();
    loader.load_into(&mut store)?;
    Ok(store)
}

fn drive(store: FixletStore, input: &str) -> Result<(FixletStore, String)> {
    let mut output = Vec::new();
    let mut session = Session::new(store, Cursor::new(input.to_string()), &mut output);
    session.run()?;
    let store = session.into_store();
    Ok((store, String::from_utf8(output)?))
}

#[test]
fn test_load_from_disk_then_list() -> Result<()> {
    let store = load(CSV)?;
    assert_eq!(store.len(), 3);

    let (_, output) = drive(store, "1\n6\n")?;
    assert!(output.contains(
        "SiteID, FxiletID, Name, Criticality, RelevantComputerCount\n\
         site-2, 2001, Patch123, High, 17\n\
         site-1, 2002, Patch456, Critical, 3\n\
         site-3, 2003, Patch123, Low, 250\n"
    ));
    Ok(())
}

#[test]
fn test_short_row_on_disk_fails_with_nothing_loaded() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_fixture(&dir, "a,b,c\nsite-1,2001,Patch123\n");
    let config = AppConfig::from_settings(path, &TomlConfig::default())?;
    let loader = FixletLoader::new(LocalStorage::default(), config);

    let mut store = FixletStore::new();
    let err = loader.load_into(&mut store).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_add_then_query_returns_new_record() -> Result<()> {
    let store = load(CSV)?;
    let before = store.query_by_name("Patch123").count();

    let (store, output) = drive(store, "4\nsite-9 2999 Patch123 Medium 42\n2\nPatch123\n6\n")?;
    assert_eq!(store.len(), 4);
    assert_eq!(store.query_by_name("Patch123").count(), before + 1);
    assert!(output.contains("Entry added successfully!"));
    assert!(output.contains("site-9, 2999, Patch123, Medium, 42\n"));
    Ok(())
}

#[test]
fn test_sort_by_count_then_delete_duplicate_id() -> Result<()> {
    let mut store = load(CSV)?;
    store.add(Fixlet::new("site-0", "2002", "Dup", "Low", 1));

    let (store, output) = drive(store, "3\nRelevantComputerCount\n5\n2002\n6\n")?;

    assert!(output.contains("Entries sorted by RelevantComputerCount"));
    assert!(output.contains("Entry deleted successfully!"));
    // 排序後第一個 2002 是 count = 1 的重複紀錄
    let remaining: Vec<(&str, i64)> = store
        .iter()
        .map(|f| (f.fixlet_id.as_str(), f.relevant_computer_count))
        .collect();
    assert_eq!(remaining, vec![("2002", 3), ("2001", 17), ("2003", 250)]);
    Ok(())
}

#[test]
fn test_string_sorts_are_lexicographic() -> Result<()> {
    let mut store = load(CSV)?;
    store.sort_by_field(SortField::SiteId);
    let sites: Vec<&str> = store.iter().map(|f| f.site_id.as_str()).collect();
    assert_eq!(sites, vec!["site-1", "site-2", "site-3"]);

    store.sort_by_field(SortField::Criticality);
    let levels: Vec<&str> = store.iter().map(|f| f.criticality.as_str()).collect();
    assert_eq!(levels, vec!["Critical", "High", "Low"]);
    Ok(())
}

#[test]
fn test_semicolon_settings_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_fixture(&dir, "a;b;c;d;e\nsite-1;2001;Patch123;High;n/a\n");
    let settings = TomlConfig::from_toml_str("[loader]\ndelimiter = \";\"\n")?;
    let config = AppConfig::from_settings(path, &settings)?;

    let mut store = FixletStore::new();
    FixletLoader::new(LocalStorage::default(), config).load_into(&mut store)?;
    assert_eq!(store.as_slice()[0].name, "Patch123");
    assert_eq!(store.as_slice()[0].relevant_computer_count, 0);
    Ok(())
}

#[test]
fn test_bad_quoting_on_disk_fails_with_nothing_loaded() -> Result<()> {
    let rows = [
        "s1,101,Patch123,High,\"10\n",
        "s1,10\"1,Patch123,High,10\n",
        "s1,\"101\"x,Patch123,High,10\n",
    ];

    for row in rows {
        let content = format!("SiteID,FxiletID,Name,Criticality,RelevantComputerCount\n{}", row);
        let err = load(&content).unwrap_err();
        let err = err.downcast::<fixlet_manager::FixletError>()?;
        assert!(matches!(err, fixlet_manager::FixletError::QuotingError { .. }), "{}", row);
        assert_eq!(err.exit_code(), 1);
    }
    Ok(())
}
