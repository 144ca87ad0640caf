use std::cmp::Ordering;
use std::thread;

use collations::mysql::{build_registry, register_builtins, SimpleCi, SortOrder};
use collations::{
    Charset, Collation, CollationId, Error, Registry, RegistryBuilder, RegistryOptions,
    WeightLimit,
};
use collations_test::setup_if_needed;

// A `latin1` collation that folds ASCII case and sorts digits after letters.
static DIGITS_LAST: SortOrder = digits_last();

const fn digits_last() -> SortOrder {
    let mut table = [0; 256];
    let mut b: u8 = 0;

    loop {
        table[b as usize] = match b {
            b'0'..=b'9' => 200 + (b - b'0'),
            _ => b.to_ascii_uppercase(),
        };

        if b == u8::MAX {
            break table;
        }

        b += 1;
    }
}

static LATIN1_DIGITS_LAST_CI: SimpleCi = SimpleCi::new(
    CollationId(1024),
    "latin1_digits_last_ci",
    Charset::Latin1,
    &DIGITS_LAST,
);

static SHADOWS_BINARY: SimpleCi = SimpleCi::new(
    CollationId::BINARY,
    "not_binary",
    Charset::Latin1,
    &DIGITS_LAST,
);

#[test]
fn it_shares_the_global_registry_across_threads() {
    setup_if_needed();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let registry = collations::registry();
                let swedish = registry.get(CollationId::LATIN1_SWEDISH_CI).unwrap();

                assert_eq!(swedish.collate(b"abc", b"ABC", false), Ordering::Equal);

                registry
            })
        })
        .collect();

    let registries: Vec<&Registry> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(registries.windows(2).all(|w| std::ptr::eq(w[0], w[1])));
}

#[test]
fn it_looks_up_builtins_by_name() -> anyhow::Result<()> {
    let registry = build_registry(RegistryOptions::new())?;

    let bin = registry.by_name("LATIN1_BIN").unwrap();

    assert_eq!(bin.id(), CollationId::LATIN1_BIN);
    assert_eq!(bin.charset(), Charset::Latin1);
    assert!(bin.is_binary());

    assert!(registry.by_name("utf8mb4_general_ci").is_none());
    assert!(registry.get(CollationId(45)).is_none());

    Ok(())
}

#[test]
fn it_registers_custom_collations_next_to_builtins() -> anyhow::Result<()> {
    let mut builder = RegistryBuilder::with_options(
        RegistryOptions::new()
            .server_collation("latin1_digits_last_ci")
            .log_registrations(log::LevelFilter::Trace),
    );

    register_builtins(&mut builder)?;
    builder.register(&LATIN1_DIGITS_LAST_CI, false)?;

    let registry = builder.build()?;
    let server = registry.server_default().unwrap();

    assert_eq!(server.id(), CollationId(1024));
    assert_eq!(server.collate(b"9", b"z", false), Ordering::Greater);
    assert_eq!(server.collate(b"Z", b"z", false), Ordering::Equal);

    // the charset default is unaffected
    assert_eq!(
        registry.default_for(Charset::Latin1).map(|c| c.id()),
        Some(CollationId::LATIN1_SWEDISH_CI)
    );

    let swedish = registry.get(CollationId::LATIN1_SWEDISH_CI).unwrap();
    assert_eq!(swedish.collate(b"9", b"z", false), Ordering::Less);

    Ok(())
}

#[test]
fn it_refuses_to_reuse_a_builtin_id() -> anyhow::Result<()> {
    let mut builder = RegistryBuilder::new();
    register_builtins(&mut builder)?;

    let err = builder.register(&SHADOWS_BINARY, false).unwrap_err();

    assert!(matches!(err, Error::DuplicateId { id: CollationId::BINARY, .. }));

    Ok(())
}

#[test]
fn it_refuses_to_register_builtins_twice() -> anyhow::Result<()> {
    let mut builder = RegistryBuilder::new();
    register_builtins(&mut builder)?;

    assert!(register_builtins(&mut builder).is_err());

    Ok(())
}

#[test]
fn custom_weight_strings_follow_the_custom_table() {
    let key = LATIN1_DIGITS_LAST_CI.weight_string_vec(b"a1", WeightLimit::Codepoints(3));

    assert_eq!(key, [b'A', 201, b' ']);
}

#[test]
fn it_reads_options_from_the_environment() -> anyhow::Result<()> {
    std::env::set_var("CHARACTER_SET_SERVER", "ascii");
    let options = RegistryOptions::from_env();
    std::env::remove_var("CHARACTER_SET_SERVER");

    assert_eq!(options.get_server_charset(), Some(Charset::Ascii));

    let registry = build_registry(options)?;
    assert_eq!(
        registry.server_default().map(|c| c.id()),
        Some(CollationId::ASCII_GENERAL_CI)
    );

    Ok(())
}
