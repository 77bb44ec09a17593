use scoped_tempdir::{ScopedTempDir, TempDirOptions};

fn main() {
    let tmp = std::env::temp_dir();
    println!("Temp dir: {}", tmp.display());

    // creates `/tmp/<uuid>` on host
    let mut scratch = ScopedTempDir::new().unwrap();
    println!("Scratch dir: {scratch}");

    std::fs::write(scratch.path().join("hello.txt"), b"Hello").unwrap();

    // creates `/tmp/hello-world`, or `/tmp/hello-world.1` if the first one is taken;
    // this one survives the program
    let mut report = TempDirOptions::new()
        .prefix("hello-world")
        .delete_on_release(false)
        .create()
        .unwrap();
    std::fs::write(report.path().join("report.txt"), b"World").unwrap();

    let hello = std::fs::read(scratch.path().join("hello.txt")).unwrap();
    let world = std::fs::read(report.path().join("report.txt")).unwrap();
    println!(
        "{}, {}!",
        String::from_utf8(hello).unwrap(),
        String::from_utf8(world).unwrap()
    );

    // removes the scratch dir with its content
    scratch.release();
    assert!(!scratch.path().exists());

    // does nothing on disk
    report.release();
    println!("Report kept in: {report}");

    // At this point both variables will be destroyed;
    // dropping a released directory has no further effect.
}
