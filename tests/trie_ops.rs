use triedict::{Trie, TrieError, MAX_TRANSLATION_SYMBOLS, MAX_WORD_SYMBOLS};

fn w(text: &str) -> Vec<u8> {
    text.bytes().collect()
}

#[test]
fn cat_car_cats_scenario() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("cat"), &w("gato")).expect("add cat");
    trie.add_word(&w("car"), &w("carro")).expect("add car");
    trie.add_word(&w("cats"), &w("gatos")).expect("add cats");

    assert_eq!(trie.get_entry_count(), 3);
    assert_eq!(
        trie.search_word(&w("ca")),
        None,
        "interior node has children but no translation"
    );

    let matches = trie.get_prefix_words(&w("ca"), 10);
    assert_eq!(matches, vec![w("car"), w("cat"), w("cats")]);

    assert_eq!(trie.delete_word(&w("cat")), Some(w("gato")));
    assert_eq!(trie.get_entry_count(), 2);
    assert_eq!(trie.search_word(&w("cats")), Some(&w("gatos")[..]));
}

#[test]
fn duplicate_add_leaves_trie_unchanged() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("sol"), &w("sun")).expect("first add");

    let err = trie
        .add_word(&w("sol"), &w("sole"))
        .expect_err("second add must fail");
    assert!(matches!(err, TrieError::DuplicateWord));
    assert_eq!(trie.get_entry_count(), 1);
    assert_eq!(trie.search_word(&w("sol")), Some(&w("sun")[..]));
}

#[test]
fn delete_miss_changes_nothing() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("luna"), &w("moon")).expect("add");

    assert_eq!(trie.delete_word(&w("sol")), None);
    assert_eq!(trie.delete_word(&w("lun")), None, "prefix of a stored word");
    assert_eq!(trie.delete_word(&w("lunar")), None, "extension of a stored word");
    assert_eq!(trie.get_entry_count(), 1);
    assert_eq!(trie.search_word(&w("luna")), Some(&w("moon")[..]));
}

#[test]
fn deleting_one_word_leaves_others_alone() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("cat"), &w("gato")).expect("add");
    trie.add_word(&w("car"), &w("carro")).expect("add");
    trie.add_word(&w("cats"), &w("gatos")).expect("add");

    assert_eq!(trie.delete_word(&w("car")), Some(w("carro")));
    assert_eq!(trie.search_word(&w("car")), None);
    assert_eq!(trie.search_word(&w("cat")), Some(&w("gato")[..]));
    assert_eq!(trie.search_word(&w("cats")), Some(&w("gatos")[..]));
    assert_eq!(trie.get_prefix_words(&w("ca"), 10), vec![w("cat"), w("cats")]);
}

#[test]
fn pruning_stops_at_the_first_populated_ancestor() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("ab"), &w("x")).expect("add");
    trie.add_word(&w("abcde"), &w("y")).expect("add");

    assert_eq!(trie.delete_word(&w("abcde")), Some(w("y")));
    assert_eq!(trie.search_word(&w("ab")), Some(&w("x")[..]));
    assert_eq!(
        trie.get_prefix_words(&w("a"), 10),
        vec![w("ab")],
        "the chain below the surviving word must be gone"
    );

    assert_eq!(trie.delete_word(&w("ab")), Some(w("x")));
    assert!(trie.is_empty(), "root left with no children and no translation");
    assert_eq!(trie.get_entry_count(), 0);

    // re-insert produces a fresh, working path
    trie.add_word(&w("abcde"), &w("z")).expect("re-add");
    assert_eq!(trie.search_word(&w("abcde")), Some(&w("z")[..]));
    assert_eq!(trie.get_entry_count(), 1);
}

#[test]
fn prefix_query_bounds_and_order() {
    let mut trie: Trie<u8> = Trie::new();
    for (word, translation) in [("b", "1"), ("ba", "2"), ("bad", "3"), ("bag", "4"), ("cab", "5")] {
        trie.add_word(&w(word), &w(translation)).expect("add");
    }

    assert_eq!(
        trie.get_prefix_words(&w("b"), 10),
        vec![w("b"), w("ba"), w("bad"), w("bag")]
    );
    assert_eq!(trie.get_prefix_words(&w("b"), 2), vec![w("b"), w("ba")]);
    assert_eq!(trie.get_prefix_words(&w("b"), 0), Vec::<Vec<u8>>::new());
    assert_eq!(trie.get_prefix_words(&w("zz"), 5), Vec::<Vec<u8>>::new());

    // an empty prefix enumerates everything, still bounded
    assert_eq!(trie.get_prefix_words(&[], 3), vec![w("b"), w("ba"), w("bad")]);
}

#[test]
fn rejects_empty_too_long_and_reserved_sequences() {
    let mut trie: Trie<u8> = Trie::new();
    assert!(matches!(trie.add_word(&[], &w("x")), Err(TrieError::EmptyWord)));
    assert!(matches!(trie.add_word(&w("x"), &[]), Err(TrieError::EmptyWord)));

    let long_word = vec![b'a'; MAX_WORD_SYMBOLS + 1];
    assert!(matches!(
        trie.add_word(&long_word, &w("x")),
        Err(TrieError::WordTooLong(_))
    ));
    let longest = vec![b'a'; MAX_WORD_SYMBOLS];
    trie.add_word(&longest, &w("ok")).expect("word at the limit fits");

    let long_translation = vec![b'a'; MAX_TRANSLATION_SYMBOLS + 1];
    assert!(matches!(
        trie.add_word(&w("y"), &long_translation),
        Err(TrieError::TranslationTooLong(_))
    ));
    let longest_translation = vec![b'a'; MAX_TRANSLATION_SYMBOLS];
    trie.add_word(&w("y"), &longest_translation)
        .expect("translation at the limit fits");

    assert!(matches!(
        trie.add_word(&[b'a', 0, b'b'], &w("x")),
        Err(TrieError::ReservedSymbol)
    ));
    assert!(matches!(
        trie.add_word(&w("z"), &[0]),
        Err(TrieError::ReservedSymbol)
    ));
    assert_eq!(trie.get_entry_count(), 2);
}

#[test]
fn custom_terminator_frees_zero_for_data() {
    let mut trie: Trie<u8> = Trie::new().with_terminator(b'#');
    trie.add_word(&[0, 1, 2], &[9, 0]).expect("zero is a data symbol here");
    assert!(matches!(
        trie.add_word(&[b'#'], &[1]),
        Err(TrieError::ReservedSymbol)
    ));
    assert_eq!(trie.search_word(&[0, 1, 2]), Some(&[9u8, 0][..]));
}

#[test]
fn empty_word_is_never_found() {
    let mut trie: Trie<u8> = Trie::new();
    trie.add_word(&w("a"), &w("b")).expect("add");

    assert_eq!(trie.search_word(&[]), None);
    assert_eq!(trie.delete_word(&[]), None);
    assert_eq!(trie.get_entry_count(), 1);
}

#[test]
fn wide_symbol_trie_operations() {
    let mut trie: Trie<u16> = Trie::new();
    let word = [500u16, 60_000, 1];
    trie.add_word(&word, &[42u16]).expect("add");

    assert_eq!(trie.search_word(&word), Some(&[42u16][..]));
    assert_eq!(trie.get_prefix_words(&[500u16], 10), vec![word.to_vec()]);
    assert_eq!(trie.delete_word(&word), Some(vec![42u16]));
    assert!(trie.is_empty());
}
