use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::catalog::SkillJob;
use crate::fetch::DocSource;
use crate::library::Library;
use crate::render::render_skill;
use crate::settings::Settings;
use crate::writer::write_skill;

/// Counts returned after a generation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub total: usize,
    pub written: usize,
    pub skipped: usize,
}

impl GenerateStats {
    pub fn print(&self) {
        println!(
            "Done: {} skills ({} written, {} skipped).",
            self.total, self.written, self.skipped
        );
    }
}

/// Fetch → render → write for every job.
///
/// Pages are fetched one at a time; a failed fetch is logged and that job is
/// skipped. Rendering is pure and runs on the rayon pool, files are then
/// written in catalog order.
pub async fn generate<S: DocSource>(
    source: &S,
    jobs: Vec<SkillJob>,
    library: &Library,
    settings: &Settings,
) -> Result<GenerateStats> {
    let total = jobs.len();
    let mut skipped = 0usize;

    // Phase 1: Fetch
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {wide_msg}")?
            .progress_chars("=> "),
    );

    let mut pages: Vec<(SkillJob, Option<String>)> = Vec::with_capacity(total);
    for job in jobs {
        pb.inc(1);
        let Some(url) = job.url.as_deref() else {
            pages.push((job, None));
            continue;
        };

        pb.set_message(url.to_string());
        let fetched = source.fetch(url).await;
        match fetched {
            Ok(markdown) => pages.push((job, Some(markdown))),
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                skipped += 1;
            }
        }
    }
    pb.finish_and_clear();

    // Phase 2: Render
    let rendered: Vec<(PathBuf, String)> = pages
        .par_iter()
        .map(|(job, markdown)| {
            let content = render_skill(
                job,
                markdown.as_deref(),
                library,
                settings.max_apis_per_category,
            );
            (job.dir.clone(), content)
        })
        .collect();

    // Phase 3: Write
    let mut written = 0usize;
    for (dir, content) in &rendered {
        let path = write_skill(&settings.output_dir, dir, content)?;
        info!("Created {}", path.display());
        written += 1;
    }

    Ok(GenerateStats {
        total,
        written,
        skipped,
    })
}
