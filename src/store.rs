use crate::db::kv::{get_entry, set_entry};
use crate::error::{Result, VocabError};
use crate::logger;
use crate::models::WordPair;
use crate::seed::SeedSource;
use rusqlite::Connection;

/// The ordered word list and its persisted copy under a single key-value entry.
///
/// Every mutation writes the whole list back before returning. If the write
/// fails the mutation is undone, so memory and storage never disagree.
#[derive(Debug)]
pub struct WordStore {
    conn: Connection,
    key: String,
    words: Vec<WordPair>,
}

impl WordStore {
    /// Reads the persisted list. Missing, blank or unreadable entries yield an empty store.
    pub fn open(conn: Connection, key: &str) -> Result<Self> {
        let raw = get_entry(&conn, key)?;
        let words = match raw.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(json) => match serde_json::from_str::<Vec<WordPair>>(json) {
                Ok(words) => words,
                Err(e) => {
                    logger::warn(&format!("Ignoring unreadable word list under {}: {}", key, e));
                    Vec::new()
                }
            },
        };

        logger::log(&format!("Loaded {} words from storage", words.len()));

        Ok(Self {
            conn,
            key: key.to_string(),
            words,
        })
    }

    /// Opens the store and, if it is empty, fills it from `seed`.
    /// A failing seed leaves the store empty.
    pub fn load_or_seed(conn: Connection, key: &str, seed: &dyn SeedSource) -> Result<Self> {
        let mut store = Self::open(conn, key)?;
        store.seed_from(seed)?;
        Ok(store)
    }

    /// Fetches `seed` on the calling thread when the store is empty.
    pub fn seed_from(&mut self, seed: &dyn SeedSource) -> Result<usize> {
        if !self.needs_seed() {
            return Ok(0);
        }
        self.apply_fetched_seed(seed.fetch(), &seed.describe())
    }

    /// Installs the outcome of a seed fetch and returns how many words were added.
    ///
    /// A failed fetch is logged and leaves the store as it was; only a failed
    /// write of the fetched words is an error.
    pub fn apply_fetched_seed(
        &mut self,
        fetched: Result<Vec<WordPair>>,
        origin: &str,
    ) -> Result<usize> {
        match fetched {
            Ok(pairs) => {
                let count = pairs.len();
                Ok(if self.apply_seed(pairs)? { count } else { 0 })
            }
            Err(e) => {
                logger::warn(&format!("Seed from {} failed: {}", origin, e));
                Ok(0)
            }
        }
    }

    pub fn words(&self) -> &[WordPair] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&WordPair> {
        self.words.get(index)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn needs_seed(&self) -> bool {
        self.words.is_empty()
    }

    pub fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.words)?;
        set_entry(&self.conn, &self.key, &json)?;
        Ok(())
    }

    pub fn append(&mut self, pair: WordPair) -> Result<()> {
        self.words.push(pair);
        if let Err(e) = self.persist() {
            self.words.pop();
            logger::error(&format!("Failed to save new word: {}", e));
            return Err(e);
        }
        Ok(())
    }

    /// Removes the words at `indices`, given as positions in the current list.
    ///
    /// Indices are removed highest first, so input order does not matter and
    /// duplicates count once. Nothing is removed if any index is out of range.
    pub fn remove_by_indices(&mut self, indices: &[usize]) -> Result<usize> {
        let len = self.words.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(VocabError::IndexOutOfRange { index, len });
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        let previous = self.words.clone();
        for &index in &sorted {
            self.words.remove(index);
        }

        if let Err(e) = self.persist() {
            self.words = previous;
            logger::error(&format!("Failed to save after delete: {}", e));
            return Err(e);
        }

        Ok(sorted.len())
    }

    /// Installs an externally supplied initial list. Ignored once the store has words.
    pub fn apply_seed(&mut self, pairs: Vec<WordPair>) -> Result<bool> {
        if !self.words.is_empty() {
            logger::log("Store already has words, skipping seed");
            return Ok(false);
        }
        if pairs.is_empty() {
            return Ok(false);
        }

        self.words = pairs;
        if let Err(e) = self.persist() {
            self.words.clear();
            logger::error(&format!("Failed to save seed words: {}", e));
            return Err(e);
        }

        logger::log(&format!("Seeded store with {} words", self.words.len()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::run_migrations;
    use crate::seed::SeedSource;

    const KEY: &str = "vocab_words_v1";

    struct FixedSeed(Vec<WordPair>);

    impl SeedSource for FixedSeed {
        fn fetch(&self) -> Result<Vec<WordPair>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    struct BrokenSeed;

    impl SeedSource for BrokenSeed {
        fn fetch(&self) -> Result<Vec<WordPair>> {
            Err(VocabError::Seed("unreachable".to_string()))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn open_conn(dir: &tempfile::TempDir) -> Connection {
        let conn = Connection::open(dir.path().join("test.db")).unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn abc() -> Vec<WordPair> {
        vec![
            WordPair::new("a", "a"),
            WordPair::new("b", "b"),
            WordPair::new("c", "c"),
        ]
    }

    fn store_with(dir: &tempfile::TempDir, words: Vec<WordPair>) -> WordStore {
        let mut store = WordStore::open(open_conn(dir), KEY).unwrap();
        store.apply_seed(words).unwrap();
        store
    }

    #[test]
    fn test_persist_then_reload_is_identical() {
        let temp_dir = tempfile::tempdir().unwrap();
        let words = vec![
            WordPair::new("dog", "犬"),
            WordPair::new("dog", "犬"),
            WordPair::new("Quote \"me\"", "引用"),
        ];
        let store = store_with(&temp_dir, words.clone());
        store.persist().unwrap();
        drop(store);

        let reloaded = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        assert_eq!(reloaded.words(), words.as_slice());
    }

    #[test]
    fn test_append_survives_reload() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, abc());
        store.append(WordPair::new("dog", "犬")).unwrap();
        drop(store);

        let reloaded = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.get(3), Some(&WordPair::new("dog", "犬")));
    }

    #[test]
    fn test_remove_is_independent_of_index_order() {
        for indices in [[0, 2], [2, 0]] {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut store = store_with(&temp_dir, abc());
            assert_eq!(store.remove_by_indices(&indices).unwrap(), 2);
            assert_eq!(store.words(), &[WordPair::new("b", "b")]);

            drop(store);
            let reloaded = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
            assert_eq!(reloaded.words(), &[WordPair::new("b", "b")]);
        }
    }

    #[test]
    fn test_remove_collapses_duplicate_indices() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, abc());
        assert_eq!(store.remove_by_indices(&[1, 1]).unwrap(), 1);
        assert_eq!(
            store.words(),
            &[WordPair::new("a", "a"), WordPair::new("c", "c")]
        );
    }

    #[test]
    fn test_remove_out_of_range_leaves_store_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, abc());
        let result = store.remove_by_indices(&[0, 3]);
        assert!(matches!(
            result,
            Err(VocabError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_open_treats_blank_and_corrupt_entries_as_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let conn = open_conn(&temp_dir);
        set_entry(&conn, KEY, "   ").unwrap();
        let store = WordStore::open(conn, KEY).unwrap();
        assert!(store.is_empty());

        let conn = open_conn(&temp_dir);
        set_entry(&conn, KEY, "{not json").unwrap();
        let store = WordStore::open(conn, KEY).unwrap();
        assert!(store.needs_seed());
    }

    #[test]
    fn test_load_or_seed_uses_seed_when_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store =
            WordStore::load_or_seed(open_conn(&temp_dir), KEY, &FixedSeed(abc())).unwrap();
        assert_eq!(store.words(), abc().as_slice());
        drop(store);

        // Seed was persisted
        let reloaded = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn test_load_or_seed_prefers_persisted_words() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, vec![WordPair::new("dog", "犬")]);
        store.persist().unwrap();
        drop(store);

        let store =
            WordStore::load_or_seed(open_conn(&temp_dir), KEY, &FixedSeed(abc())).unwrap();
        assert_eq!(store.words(), &[WordPair::new("dog", "犬")]);
    }

    #[test]
    fn test_load_or_seed_fails_open_to_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = WordStore::load_or_seed(open_conn(&temp_dir), KEY, &BrokenSeed).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_from_reports_count_once() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        assert_eq!(store.seed_from(&FixedSeed(abc())).unwrap(), 3);
        assert_eq!(store.seed_from(&FixedSeed(abc())).unwrap(), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_apply_fetched_seed_failure_keeps_store_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        let fetched = Err(VocabError::Seed("offline".to_string()));
        assert_eq!(store.apply_fetched_seed(fetched, "worker").unwrap(), 0);
        assert!(store.needs_seed());
    }

    #[test]
    fn test_apply_fetched_seed_write_failure_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = WordStore::open(open_conn(&temp_dir), KEY).unwrap();
        store.conn.execute("DROP TABLE kv_entries", []).unwrap();
        assert!(store.apply_fetched_seed(Ok(abc()), "worker").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_seed_ignored_when_words_exist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, vec![WordPair::new("dog", "犬")]);
        assert!(!store.apply_seed(abc()).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_write_rolls_back_append() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = store_with(&temp_dir, abc());
        store.conn.execute("DROP TABLE kv_entries", []).unwrap();

        assert!(store.append(WordPair::new("dog", "犬")).is_err());
        assert_eq!(store.words(), abc().as_slice());

        assert!(store.remove_by_indices(&[0]).is_err());
        assert_eq!(store.words(), abc().as_slice());
    }
}
