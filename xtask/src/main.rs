#[cfg(test)]
mod tidy;

use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = section("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = section("DEMOS");
        cmd!(sh, "cargo run -q --example simple_flag -- chris 42 --married").run()?;
        cmd!(sh, "cargo run -q --example sub_parser -- add 1 2").run()?;
        cmd!(sh, "cargo run -q --example vector_flag -- -n 1 -n 2 --number=3").run()?;
        cmd!(sh, "cargo run -q --example custom_flag -- 7").run()?;
        // A failed parse must exit with a non-zero code.
        let status = cmd!(sh, "cargo run -q --example custom_flag -- 4").ignore_status().output()?;
        assert!(!status.status.success());
        let status = cmd!(sh, "cargo run -q --example sub_parser -- pow 10 100").ignore_status().output()?;
        assert!(!status.status.success());
    }

    {
        let _s = section("PUBLISH");

        let pkgid = cmd!(sh, "cargo pkgid -p flagparser").read()?;
        let version = match pkgid.rsplit_once(['#', '@']) {
            Some((_, version)) => version.to_string(),
            None => panic!("unexpected pkgid: {pkgid}"),
        };
        let tag = format!("v{version}");

        let current_branch = cmd!(sh, "git branch --show-current").read()?;
        let tag_exists =
            cmd!(sh, "git tag --list").read()?.split_ascii_whitespace().any(|it| it == tag);

        if current_branch == "master" && !tag_exists {
            cmd!(sh, "git tag {tag}").run()?;
            cmd!(sh, "cargo publish -p flagparser").run()?;
            cmd!(sh, "git push --tags").run()?;
        }
    }

    Ok(())
}

fn section(name: &'static str) -> impl Drop {
    println!("::group::{name}");
    let start = Instant::now();
    defer(move || {
        let elapsed = start.elapsed();
        eprintln!("{name}: {elapsed:.2?}");
        println!("::endgroup::");
    })
}

fn defer<F: FnOnce()>(f: F) -> impl Drop {
    struct D<F: FnOnce()>(Option<F>);
    impl<F: FnOnce()> Drop for D<F> {
        fn drop(&mut self) {
            if let Some(f) = self.0.take() {
                f()
            }
        }
    }
    D(Some(f))
}
