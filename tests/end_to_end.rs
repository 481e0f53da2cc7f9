use std::path::Path;

use qcflow_rust::manifest::JobManifest;
use qcflow_rust::{filter_kind, find_first, AnyFile, BaseFile, ConstructionHelper, FileArtifact, FileRegistry, FlagstatsFile,
                  InMemoryFileRegistry, InsertSizesTextFile, JobRef};

#[test]
fn flagstats_handle_reports_helper_path() {
    let helper = ConstructionHelper::new("sample1.flagstat", JobRef::new("job-1", "flagstat"));
    let file = FlagstatsFile::new(&helper).unwrap();
    let base: &BaseFile = file.as_ref();
    assert_eq!(base.path(), Path::new("sample1.flagstat"));
    assert_eq!(file.path(), Path::new("sample1.flagstat"));
}

#[test]
fn insert_sizes_handle_reports_helper_path() {
    let helper = ConstructionHelper::new("sample1.insertsizes.txt", JobRef::new("job-1", "insertsizes"));
    let file = InsertSizesTextFile::new(&helper).unwrap();
    assert_eq!(file.path(), Path::new("sample1.insertsizes.txt"));
}

#[test]
fn workflow_finds_flagstat_among_job_outputs() {
    let job = JobRef::new("alignment-17", "bwa_mem_sort_qc");
    let ctx_helper = |p: &str| ConstructionHelper::new(p, job.clone()).with_output_dir("/project/results");

    let outputs: Vec<AnyFile> = vec![InsertSizesTextFile::new(&ctx_helper("tumor.insertsizes.txt")).unwrap().into(),
                                     FlagstatsFile::new(&ctx_helper("tumor.flagstat")).unwrap().into()];

    let flagstat = find_first::<FlagstatsFile>(&outputs).unwrap();
    assert_eq!(filter_kind::<InsertSizesTextFile>(&outputs).count(), 1);
    assert_eq!(flagstat.path(), Path::new("/project/results/tumor.flagstat"));

    let mut registry = InMemoryFileRegistry::new();
    for f in outputs {
        assert!(registry.register(f));
    }
    let manifest = JobManifest::from_registry(&registry, "alignment-17");
    assert_eq!(manifest.files.len(), 2);
    assert!(registry.find::<InsertSizesTextFile>("alignment-17").is_some());
}
