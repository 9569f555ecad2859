// Stamps the build with a UTC timestamp and the short git commit.
use std::process::Command;

fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn main() {
    let timestamp = if cfg!(windows) {
        run("powershell", &["-Command", "(Get-Date).ToUniversalTime().ToString('yyyy-MM-dd HH:mm:ss')"])
    } else {
        run("date", &["-u", "+%Y-%m-%d %H:%M:%S"])
    };
    let commit = run("git", &["rev-parse", "--short", "HEAD"]);

    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp.as_deref().unwrap_or("unknown"));
    println!("cargo:rustc-env=BUILD_COMMIT={}", commit.as_deref().unwrap_or("unknown"));
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
