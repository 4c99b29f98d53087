//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let pages = ContentLoader::new(site).load_pages()?;
    tracing::info!("Loaded {} pages", pages.len());

    let stats = Generator::new(site).generate(&pages)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages and {} tag pages in {:.2}s",
        stats.pages,
        stats.tags,
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch for file changes and regenerate
///
/// Configuration edits are picked up by reopening the site before each run.
pub async fn watch(site: &Site) -> Result<()> {
    let site = site.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&site)).await?
}

fn watch_blocking(site: &Site) -> Result<()> {
    let (tx, rx) = channel::<DebounceEventResult>();

    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if site.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&site.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", site.source_dir);
    }

    let config_path = site.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|e| {
                    let path = e.path.to_string_lossy();
                    !path.contains(".git") && !path.contains(".DS_Store") && !path.ends_with('~')
                });
                if !relevant {
                    continue;
                }

                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }

                let result = Site::new(&site.base_dir).and_then(|site| run(&site));
                if let Err(e) = result {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_generates_from_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "page_title: Test Site\nfeedback:\n  email: me@test.org\n",
        )
        .unwrap();
        let source = dir.path().join("content");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("hello.md"),
            "---\ntitle: Hello\ntags: [greeting]\npublish: true\n---\nHello there, reader.\n",
        )
        .unwrap();
        fs::write(source.join("diary.md"), "---\ntitle: Diary\n---\nPrivate.\n").unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();

        let html = fs::read_to_string(site.public_dir.join("hello.html")).unwrap();
        assert!(html.contains(r#"class="nav-home">Test Site</a>"#));
        assert!(html.contains("mailto:me@test.org?subject=Re%3A%20Hello"));
        assert!(html.contains(r#"<span class="reading-time">1 min</span>"#));
        assert!(html.contains(r#"<a href="/tags/greeting" class="tag">greeting</a>"#));
        assert!(site.public_dir.join("tags/greeting.html").exists());
        assert!(site.public_dir.join("index.css").exists());
        assert!(!site.public_dir.join("diary.html").exists());
    }
}
