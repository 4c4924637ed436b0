use crate::add_test;
use crate::common::{generate_random_data, Fixture, BINARY_DATA, REPETITIVE_DATA, SAMPLE_TEXT};
use crate::MB;

// Compress a file and restore it by name inference
add_test!(compress_then_decompress_file, async {
    const FILE_NAME: &str = "test.txt";

    let data = SAMPLE_TEXT.as_bytes();
    let fixture = Fixture::with_file(FILE_NAME, data);

    let output = fixture.run(&[FILE_NAME]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(fixture.file_exists("test.txt.deflate"));
    // FILE1 is never deleted
    assert_eq!(fixture.read(FILE_NAME), data);

    let output = fixture.run(&["-d", "-f", "test.txt.deflate"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(fixture.read(FILE_NAME), data);
    assert!(fixture.file_exists("test.txt.deflate"));
});

// stdin to stdout in both directions
add_test!(stdin_stdout_roundtrip, async {
    let fixture = Fixture::empty();
    let data = REPETITIVE_DATA.repeat(100);

    let compressed = fixture.run_with_stdin(&[], data.as_bytes()).await;
    assert!(compressed.status.success());
    assert!(compressed.stdout_raw.len() < data.len());

    let restored = fixture
        .run_with_stdin(&["-d"], &compressed.stdout_raw)
        .await;
    assert!(restored.status.success());
    assert_eq!(restored.stdout, data);
});

// Explicit FILE1 FILE2 pair
add_test!(two_file_names, async {
    let fixture = Fixture::with_file("input.bin", BINARY_DATA);

    let output = fixture.run(&["input.bin", "packed"]).await;
    assert!(output.status.success());
    assert!(fixture.file_exists("packed"));

    let output = fixture.run(&["-d", "packed", "unpacked"]).await;
    assert!(output.status.success());
    assert_eq!(fixture.read("unpacked"), BINARY_DATA);
});

// Every supported level round-trips through the binary
add_test!(all_levels_roundtrip, async {
    let data = generate_random_data(64 * 1024);
    let fixture = Fixture::empty();

    for level in -2..=9 {
        let flag = format!("--level={level}");
        let compressed = fixture.run_with_stdin(&[flag.as_str()], &data).await;
        assert!(compressed.status.success(), "level {level}: {}", compressed.stderr);

        let restored = fixture
            .run_with_stdin(&["-d"], &compressed.stdout_raw)
            .await;
        assert!(restored.status.success(), "level {level}");
        assert!(restored.stdout_raw == data, "level {level}");
    }
});

// Large payload through named files
add_test!(large_file, async {
    const FILE_NAME: &str = "large.bin";

    let data = generate_random_data(4 * MB);
    let fixture = Fixture::with_file(FILE_NAME, &data);

    let output = fixture.run(&["-1", FILE_NAME]).await;
    assert!(output.status.success());

    let output = fixture
        .run(&["-d", &fixture.compressed_path(FILE_NAME), "restored.bin"])
        .await;
    assert!(output.status.success());
    assert!(fixture.read("restored.bin") == data);
});

// Test mode validates without writing anything
add_test!(test_mode_accepts_valid_stream, async {
    let fixture = Fixture::with_file("plain.txt", SAMPLE_TEXT.as_bytes());

    let output = fixture.run(&["plain.txt"]).await;
    assert!(output.status.success());

    let output = fixture.run(&["-t", "plain.txt.deflate"]).await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stdout_raw.is_empty());
});
