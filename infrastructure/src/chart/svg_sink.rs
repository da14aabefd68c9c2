//! SVG chart sink
//!
//! Renders each chart request with [`RadarChartRenderer`] onto an
//! [`SvgSurface`] and writes `<output_dir>/<target>.svg`. Targets are
//! percent-encoded into the file name, so any bean id gets a chart and no
//! target can name a path outside the output directory.

use super::svg_surface::SvgSurface;
use beanquiz_application::{
    ChartArtifact, ChartRequest, ChartSink, ChartSinkError, RadarChartRenderer,
};
use beanquiz_domain::{ChartOptions, ScoreVector};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Render a radar chart straight to an SVG string
pub fn render_svg(scores: &ScoreVector, options: &ChartOptions) -> String {
    let mut surface = SvgSurface::new();
    RadarChartRenderer::new().render(scores, &mut surface, options);
    surface.to_svg()
}

/// Writes rendered charts as SVG files
#[derive(Debug, Clone)]
pub struct SvgChartSink {
    output_dir: PathBuf,
    options: ChartOptions,
}

impl SvgChartSink {
    pub fn new(output_dir: impl Into<PathBuf>, options: ChartOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File a chart target is written to
    pub fn path_for(&self, target: &str) -> Result<PathBuf, ChartSinkError> {
        if target.is_empty() {
            return Err(ChartSinkError::InvalidTarget(target.to_string()));
        }
        Ok(self.output_dir.join(format!("{}.svg", file_stem(target))))
    }
}

/// Percent-encode `target`; `.` is encoded too so no stem is `.` or `..`
fn file_stem(target: &str) -> String {
    urlencoding::encode(target).replace('.', "%2E")
}

impl ChartSink for SvgChartSink {
    fn emit(&self, request: &ChartRequest) -> Result<ChartArtifact, ChartSinkError> {
        let path = self.path_for(&request.target)?;
        let options = self.options.merged(&request.overrides);
        let svg = render_svg(&request.scores, &options);

        let write_error = |e: std::io::Error| ChartSinkError::Write {
            target: request.target.clone(),
            message: e.to_string(),
        };
        std::fs::create_dir_all(&self.output_dir).map_err(write_error)?;
        std::fs::write(&path, svg).map_err(write_error)?;

        debug!("Chart {} rendered at {}px", request.target, options.size);
        info!("Wrote {}", path.display());
        Ok(ChartArtifact {
            target: request.target.clone(),
            path: Some(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanquiz_application::blend_chart_target;
    use beanquiz_domain::{Bean, ChartStyleOverrides};

    #[test]
    fn test_emit_writes_svg_file() {
        let temp = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(temp.path().join("charts"), ChartOptions::default());
        let request = ChartRequest::new("radar-chart-main", ScoreVector::new(3.0, 2.0, 4.0, 5.0, 1.0));

        let artifact = sink.emit(&request).unwrap();
        let path = artifact.path.unwrap();
        assert_eq!(path, temp.path().join("charts").join("radar-chart-main.svg"));

        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("酸味"));
        assert!(svg.contains(r#"width="280""#));
    }

    #[test]
    fn test_overrides_apply_per_request() {
        let temp = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(temp.path(), ChartOptions::default());
        let request = ChartRequest::new("blend-chart-x", ScoreVector::default())
            .with_overrides(ChartStyleOverrides::sized(200.0));
        let path = sink.emit(&request).unwrap().path.unwrap();
        let svg = std::fs::read_to_string(path).unwrap();
        assert!(svg.contains(r#"width="200""#));
    }

    #[test]
    fn test_path_like_targets_stay_in_output_dir() {
        let temp = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(temp.path(), ChartOptions::default());
        for target in ["../escape", "..", "a/b\\c"] {
            let path = sink.path_for(target).unwrap();
            assert_eq!(path.parent(), Some(temp.path()));
        }
        assert_eq!(
            sink.path_for("../escape").unwrap(),
            temp.path().join("%2E%2E%2Fescape.svg")
        );
        assert!(matches!(
            sink.emit(&ChartRequest::new("", ScoreVector::default())),
            Err(ChartSinkError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_any_bean_id_gets_a_chart_file() {
        let temp = tempfile::tempdir().unwrap();
        let sink = SvgChartSink::new(temp.path(), ChartOptions::default());

        let mut paths = Vec::new();
        for id in ["エチオピア", "kenya.aa", "colombia huila", "colombia_huila"] {
            let bean = Bean::new(id, id);
            let request = ChartRequest::new(blend_chart_target(&bean), ScoreVector::default())
                .with_overrides(ChartStyleOverrides::sized(200.0));
            let path = sink.emit(&request).unwrap().path.unwrap();
            assert_eq!(path.parent(), Some(temp.path()));
            assert!(path.exists());
            paths.push(path);
        }

        assert_eq!(
            paths[0].file_name().unwrap().to_str().unwrap(),
            "blend-chart-%E3%82%A8%E3%83%81%E3%82%AA%E3%83%94%E3%82%A2.svg"
        );
        assert_eq!(
            paths[1].file_name().unwrap().to_str().unwrap(),
            "blend-chart-kenya%2Eaa.svg"
        );
        // Distinct ids never share a file
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_render_svg_is_deterministic() {
        let scores = ScoreVector::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let options = ChartOptions::default().with_device_pixel_ratio(2.0);
        assert_eq!(render_svg(&scores, &options), render_svg(&scores, &options));
        assert!(render_svg(&scores, &options).contains(r#"viewBox="0 0 560 560""#));
    }
}
