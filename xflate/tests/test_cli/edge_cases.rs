use crate::add_test;
use crate::common::{generate_random_data, Fixture, SAMPLE_TEXT};
use crate::KB;

add_test!(missing_input_exits_one, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&["does-not-exist"]).await;
    assert_eq!(output.code(), 1);
    assert!(output.stderr.contains("does-not-exist"));
});

add_test!(corrupt_input_exits_one, async {
    let fixture = Fixture::empty();

    let output = fixture.run_with_stdin(&["-d"], &[0xff; 32]).await;
    assert_eq!(output.code(), 1);
    assert!(output.stderr.contains("decompressing"));

    let output = fixture.run_with_stdin(&["-t"], &[0xff; 32]).await;
    assert_eq!(output.code(), 1);
});

add_test!(truncated_input_fails_test_mode, async {
    let fixture = Fixture::empty();
    let data = generate_random_data(32 * KB);

    let compressed = fixture.run_with_stdin(&["-9"], &data).await;
    assert!(compressed.status.success());

    let half = &compressed.stdout_raw[..compressed.stdout_raw.len() / 2];
    let output = fixture.run_with_stdin(&["-t"], half).await;
    assert_eq!(output.code(), 1);
    assert!(output.stderr.contains("decompressing"));
});

add_test!(empty_stdin_roundtrip, async {
    let fixture = Fixture::empty();

    let compressed = fixture.run_with_stdin(&[], &[]).await;
    assert!(compressed.status.success());
    assert!(!compressed.stdout_raw.is_empty());

    let restored = fixture
        .run_with_stdin(&["-d"], &compressed.stdout_raw)
        .await;
    assert!(restored.status.success());
    assert!(restored.stdout_raw.is_empty());
});

add_test!(level_out_of_range_exits_one, async {
    let fixture = Fixture::with_file("in.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["--level=10", "in.txt"]).await;
    assert_eq!(output.code(), 1);
    assert!(output.stderr.contains("invalid compression level"));
    assert!(!fixture.file_exists("in.txt.deflate"));
});

add_test!(malformed_level_exits_two, async {
    let fixture = Fixture::empty();

    let output = fixture.run(&["--level=high"]).await;
    assert_eq!(output.code(), 2);
    assert!(output.stderr.contains("--level"));
});

add_test!(sentinel_single_file_uses_stdio, async {
    let fixture = Fixture::empty();

    let output = fixture
        .run_with_stdin(&["-z", "-"], SAMPLE_TEXT.as_bytes())
        .await;
    assert!(output.status.success());

    let restored = fixture
        .run_with_stdin(&["-d", "-"], &output.stdout_raw)
        .await;
    assert_eq!(restored.stdout, SAMPLE_TEXT);
});

add_test!(output_to_named_file_from_stdin, async {
    let fixture = Fixture::empty();

    let output = fixture
        .run_with_stdin(&["-", "out.deflate"], SAMPLE_TEXT.as_bytes())
        .await;
    assert!(output.status.success());
    assert!(output.stdout_raw.is_empty());
    assert!(fixture.root_dir_path().join("out.deflate").is_file());

    let output = fixture.run(&["-d", "out.deflate"]).await;
    assert!(output.status.success());
    assert_eq!(fixture.read("out"), SAMPLE_TEXT.as_bytes());
});
