use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::analyzers::ServiceInfo;
use crate::core;
use crate::introspect::{TypeCatalog, TypeIntrospector};
use crate::io::output::{create_writer, OutputFormat};
use crate::observability::{
    increment_processed, set_phase, set_progress, AnalysisPhase,
};
use crate::render::MethodReport;

/// Fully resolved options for one `analyze` run.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub catalog: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    /// Restrict the run to these services. All services when `None`.
    pub services: Option<Vec<String>>,
    pub parallel: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let types = {
        let _phase = set_phase(AnalysisPhase::CatalogLoading);
        TypeCatalog::load(&config.catalog)
            .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?
    };

    let services = select_services(&types, config.services.as_deref())?;
    info!(
        services = services.len(),
        types = types.type_count(),
        "loaded catalog"
    );

    let reports = analyze_services(&services, &types, config.parallel)?;

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = create_writer(config.format, sink);
    writer.write_reports(&reports)?;
    Ok(())
}

/// Services declared in the catalog, optionally narrowed to `names`. An
/// unknown name is an error.
pub fn select_services(types: &TypeCatalog, names: Option<&[String]>) -> Result<Vec<ServiceInfo>> {
    let all = types.services().iter().cloned().map(ServiceInfo::from);
    let Some(names) = names else {
        return Ok(all.collect());
    };
    for name in names {
        if !types.services().iter().any(|s| &s.service == name) {
            anyhow::bail!("service {name:?} is not declared in the catalog");
        }
    }
    Ok(all.filter(|s| names.contains(&s.service)).collect())
}

/// Classify every service and render its methods. Reports keep catalog
/// order whether or not services run in parallel. The first error aborts.
pub fn analyze_services(
    services: &[ServiceInfo],
    types: &dyn TypeIntrospector,
    parallel: bool,
) -> core::Result<Vec<MethodReport>> {
    set_progress(0, services.len());
    let per_service: Vec<Vec<MethodReport>> = if parallel {
        services
            .par_iter()
            .map(|service| analyze_service(service, types))
            .collect::<core::Result<_>>()?
    } else {
        services
            .iter()
            .map(|service| analyze_service(service, types))
            .collect::<core::Result<_>>()?
    };
    Ok(per_service.into_iter().flatten().collect())
}

fn analyze_service(
    service: &ServiceInfo,
    types: &dyn TypeIntrospector,
) -> core::Result<Vec<MethodReport>> {
    let methods = {
        let _phase = set_phase(AnalysisPhase::Classification);
        service.methods(types)?
    };
    let _phase = set_phase(AnalysisPhase::Rendering);
    let reports = methods
        .iter()
        .map(MethodReport::from_method)
        .collect::<core::Result<Vec<_>>>()?;
    increment_processed();
    Ok(reports)
}
