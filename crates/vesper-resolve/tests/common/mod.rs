#![allow(dead_code)]

use vesper_resolve::{
    resolve_program, NativeRegistry, Resolution, ResolutionError, ResolverConfig, ResolverWarning,
};
use vesper_syntax::Stmt;

pub fn resolve(program: &[Stmt]) -> Resolution {
    resolve_with(program, &ResolverConfig::default())
}

pub fn resolve_with(program: &[Stmt], config: &ResolverConfig) -> Resolution {
    resolve_program(program, config, &NativeRegistry::standard()).expect("tree is well formed")
}

pub fn errors(resolution: &Resolution) -> Vec<ResolutionError> {
    resolution.diagnostics.errors().cloned().collect()
}

pub fn warnings(resolution: &Resolution) -> Vec<ResolverWarning> {
    resolution.diagnostics.warnings().cloned().collect()
}

pub fn unused_names(resolution: &Resolution) -> Vec<String> {
    resolution
        .diagnostics
        .warnings()
        .filter_map(|warning| match warning {
            ResolverWarning::UnusedLocalVariable { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

pub fn shadow_count(resolution: &Resolution) -> usize {
    resolution
        .diagnostics
        .warnings()
        .filter(|warning| matches!(warning, ResolverWarning::ShadowedVariable { .. }))
        .count()
}
