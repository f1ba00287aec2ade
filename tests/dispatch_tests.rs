//! Dispatcher tests against recording handlers

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Result, anyhow};
    use salmon::VERSION;
    use salmon::cli::help::{CITATION, dual_mode_banner, top_level_help, version_line};
    use salmon::config::Settings;
    use salmon::dispatch::{Dispatcher, Handler, HandlerKind, IndexHandle, Registry};
    use salmon::error::DispatchError;
    use salmon::version::MockVersionCheck;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Call {
        args: Vec<String>,
        program: String,
        verbose: bool,
        index_loaded: bool,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
        status: i32,
    }

    impl Recorder {
        fn with_status(status: i32) -> Self {
            Self {
                status,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn args(&self) -> Vec<Vec<String>> {
            self.calls().into_iter().map(|call| call.args).collect()
        }
    }

    impl Handler for Recorder {
        fn run(
            &mut self,
            args: &[String],
            index: &mut IndexHandle,
            settings: &Settings,
        ) -> Result<i32> {
            self.calls.borrow_mut().push(Call {
                args: args.to_vec(),
                program: settings.program.clone(),
                verbose: settings.verbose,
                index_loaded: index.is_loaded(),
            });
            Ok(self.status)
        }
    }

    struct Failing;

    impl Handler for Failing {
        fn run(&mut self, _: &[String], _: &mut IndexHandle, _: &Settings) -> Result<i32> {
            Err(anyhow!("corrupt index"))
        }
    }

    struct Harness {
        dispatcher: Dispatcher,
        index: Recorder,
        reads: Recorder,
        alignments: Recorder,
        alevin: Recorder,
        swim: Recorder,
        merge: Recorder,
        checker: MockVersionCheck,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_checker(MockVersionCheck::current())
        }

        fn with_checker(checker: MockVersionCheck) -> Self {
            let index = Recorder::default();
            let reads = Recorder::default();
            let alignments = Recorder::default();
            let alevin = Recorder::default();
            let swim = Recorder::default();
            let merge = Recorder::default();
            let registry = Registry::new()
                .with_handler(HandlerKind::Index, Box::new(index.clone()))
                .with_handler(HandlerKind::QuantReads, Box::new(reads.clone()))
                .with_handler(HandlerKind::QuantAlignments, Box::new(alignments.clone()))
                .with_handler(HandlerKind::Alevin, Box::new(alevin.clone()))
                .with_handler(HandlerKind::Swim, Box::new(swim.clone()))
                .with_handler(HandlerKind::QuantMerge, Box::new(merge.clone()));
            Self {
                dispatcher: Dispatcher::new(registry, Box::new(checker.clone())),
                index,
                reads,
                alignments,
                alevin,
                swim,
                merge,
                checker,
            }
        }

        fn run(&mut self, argv: &[&str]) -> (i32, String) {
            let argv: Vec<String> = argv.iter().map(|&arg| arg.to_owned()).collect();
            let mut out = Vec::new();
            let status = self.dispatcher.run(&argv, &mut out).unwrap();
            (status, String::from_utf8(out).unwrap())
        }

        fn total_calls(&self) -> usize {
            [
                &self.index,
                &self.reads,
                &self.alignments,
                &self.alevin,
                &self.swim,
                &self.merge,
            ]
            .iter()
            .map(|recorder| recorder.calls().len())
            .sum()
        }
    }

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|&value| value.to_owned()).collect()
    }

    #[test]
    fn empty_quant_prints_dual_mode_banner() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&["salmon", "quant"]);
        assert_eq!(status, 0);
        assert_eq!(out, dual_mode_banner(VERSION));
        assert_eq!(harness.total_calls(), 0);
    }

    #[test]
    fn quant_general_help_prints_banner() {
        for flag in ["--help", "-h"] {
            let mut harness = Harness::new();
            let (status, out) = harness.run(&["salmon", "quant", flag]);
            assert_eq!(status, 0);
            assert_eq!(out, dual_mode_banner(VERSION));
            assert_eq!(harness.total_calls(), 0);
        }
    }

    #[test]
    fn help_alignment_forwards_synthetic_slice() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&[
            "salmon",
            "quant",
            "--help-alignment",
            "-i",
            "idx",
            "-1",
            "r1.fq",
        ]);
        assert_eq!(status, 0);
        assert!(out.is_empty());
        assert_eq!(harness.alignments.args(), vec![owned(&["salmon", "--help"])]);
        assert!(harness.reads.calls().is_empty());
    }

    #[test]
    fn help_reads_forwards_synthetic_slice() {
        let mut harness = Harness::new();
        harness.run(&["/opt/bin/salmon", "quant", "--help-reads", "-a", "x.bam"]);
        assert_eq!(
            harness.reads.args(),
            vec![owned(&["/opt/bin/salmon", "--help"])]
        );
        assert!(harness.alignments.calls().is_empty());
    }

    #[test]
    fn alignment_flag_forwards_full_slice() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "quant", "-a", "--someOtherFlag"]);
        assert_eq!(
            harness.alignments.args(),
            vec![owned(&["-a", "--someOtherFlag"])]
        );
        assert!(harness.reads.calls().is_empty());
    }

    #[test]
    fn eqclasses_prefix_selects_alignment_mode() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "quant", "--eqclassesXYZ"]);
        assert_eq!(harness.alignments.args(), vec![owned(&["--eqclassesXYZ"])]);
    }

    #[test]
    fn alignment_flag_found_late_in_slice() {
        let mut harness = Harness::new();
        let args = ["-t", "tx.fa", "-l", "A", "--alignments", "x.bam", "-o", "out"];
        let mut argv = vec!["salmon", "quant"];
        argv.extend(args);
        harness.run(&argv);
        assert_eq!(harness.alignments.args(), vec![owned(&args)]);
    }

    #[test]
    fn no_alignment_flag_selects_reads() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "quant", "--somethingelse"]);
        assert_eq!(harness.reads.args(), vec![owned(&["--somethingelse"])]);
        assert!(harness.alignments.calls().is_empty());
    }

    #[test]
    fn unknown_command_prints_help_and_fails() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&["salmon", "foobar"]);
        assert_eq!(status, 1);
        assert_eq!(out, top_level_help(VERSION));
        assert_eq!(harness.total_calls(), 0);
        assert!(harness.checker.calls().is_empty());
    }

    #[test]
    fn unknown_global_flag_prints_help_and_fails() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&["salmon", "-x", "quant"]);
        assert_eq!(status, 1);
        assert_eq!(out, top_level_help(VERSION));
    }

    #[test]
    fn top_level_help_without_arguments() {
        let mut harness = Harness::new();
        let cases: [&[&str]; 3] = [&["salmon"], &["salmon", "-h"], &["salmon", "--help", "quant"]];
        for argv in cases {
            let (status, out) = harness.run(argv);
            assert_eq!(status, 0);
            assert_eq!(out, top_level_help(VERSION));
        }
        assert_eq!(harness.total_calls(), 0);
    }

    #[test]
    fn version_flag() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&["salmon", "--version"]);
        assert_eq!(status, 0);
        assert_eq!(out, version_line(VERSION));
    }

    #[test]
    fn cite_prints_citation_regardless_of_other_arguments() {
        let mut harness = Harness::new();
        let (status, out) = harness.run(&["salmon", "-c", "quant", "-a", "x.bam"]);
        assert_eq!(status, 0);
        assert_eq!(out, CITATION);
        assert_eq!(harness.total_calls(), 0);
    }

    #[test]
    fn leading_global_flags_ignore_unknown_trailing_tokens() {
        let mut harness = Harness::new();

        let (status, out) = harness.run(&["salmon", "-c", "--bogus"]);
        assert_eq!(status, 0);
        assert_eq!(out, CITATION);

        let (status, out) = harness.run(&["salmon", "--cite", "-x"]);
        assert_eq!(status, 0);
        assert_eq!(out, CITATION);

        let (status, out) = harness.run(&["salmon", "-h", "--bogus"]);
        assert_eq!(status, 0);
        assert_eq!(out, top_level_help(VERSION));

        assert_eq!(harness.total_calls(), 0);
        assert!(harness.checker.calls().is_empty());
    }

    #[test]
    fn commands_reach_their_handlers() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "index", "-t", "tx.fa", "-i", "idx"]);
        harness.run(&["salmon", "alevin", "-l", "ISR"]);
        harness.run(&["salmon", "swim"]);
        harness.run(&["salmon", "quantmerge", "--quants", "a", "b"]);

        assert_eq!(harness.index.args(), vec![owned(&["-t", "tx.fa", "-i", "idx"])]);
        assert_eq!(harness.alevin.args(), vec![owned(&["-l", "ISR"])]);
        assert_eq!(harness.swim.args(), vec![Vec::<String>::new()]);
        assert_eq!(harness.merge.args(), vec![owned(&["--quants", "a", "b"])]);
    }

    #[test]
    fn handler_status_is_propagated() {
        let recorder = Recorder::with_status(42);
        let registry = Registry::new().with_handler(HandlerKind::Index, Box::new(recorder.clone()));
        let mut dispatcher = Dispatcher::new(registry, Box::new(MockVersionCheck::current()));
        let mut out = Vec::new();
        let status = dispatcher
            .run(&owned(&["salmon", "--no-version-check", "index"]), &mut out)
            .unwrap();
        assert_eq!(status, 42);
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn handler_error_is_returned() {
        let registry = Registry::new().with_handler(HandlerKind::QuantReads, Box::new(Failing));
        let mut dispatcher = Dispatcher::new(registry, Box::new(MockVersionCheck::current()));
        let mut out = Vec::new();
        let err = dispatcher
            .run(&owned(&["salmon", "quant", "-i", "idx"]), &mut out)
            .unwrap_err();
        let dispatch = err.downcast_ref::<DispatchError>().unwrap();
        assert!(matches!(dispatch, DispatchError::Handler { .. }));
        assert_eq!(dispatch.exit_code(), 1);
        assert!(err.to_string().contains("QuantReads failed: corrupt index"));
    }

    #[test]
    fn settings_reach_handlers_with_an_empty_index() {
        let index = Recorder::default();
        let registry = Registry::new().with_handler(HandlerKind::Index, Box::new(index.clone()));
        let mut dispatcher =
            Dispatcher::new(registry, Box::new(MockVersionCheck::current())).with_verbose(true);
        let mut out = Vec::new();
        dispatcher
            .run(&owned(&["./salmon", "index"]), &mut out)
            .unwrap();
        assert_eq!(
            index.calls(),
            vec![Call {
                args: Vec::new(),
                program: "./salmon".to_owned(),
                verbose: true,
                index_loaded: false,
            }]
        );
    }

    #[test]
    fn version_check_runs_once_before_dispatch() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "quant", "-a", "x.bam"]);
        assert_eq!(harness.checker.calls(), vec![VERSION.to_owned()]);
    }

    #[test]
    fn no_version_check_disables_check_and_is_not_forwarded() {
        let mut harness = Harness::new();
        harness.run(&["salmon", "--no-version-check", "quant", "-a", "x.bam"]);
        assert!(harness.checker.calls().is_empty());
        assert_eq!(harness.alignments.args(), vec![owned(&["-a", "x.bam"])]);
    }

    #[test]
    fn help_output_skips_version_check() {
        let mut harness = Harness::new();
        harness.run(&["salmon"]);
        harness.run(&["salmon", "-v"]);
        harness.run(&["salmon", "-c"]);
        assert!(harness.checker.calls().is_empty());
    }

    #[test]
    fn failed_version_check_does_not_stop_dispatch() {
        let mut harness = Harness::with_checker(MockVersionCheck::failing());
        let (status, _) = harness.run(&["salmon", "index", "-i", "idx"]);
        assert_eq!(status, 0);
        assert_eq!(harness.checker.calls().len(), 1);
        assert_eq!(harness.index.args(), vec![owned(&["-i", "idx"])]);
    }

    #[test]
    fn outdated_version_check_does_not_stop_dispatch() {
        let mut harness = Harness::with_checker(MockVersionCheck::outdated("99.0.0"));
        harness.run(&["salmon", "swim"]);
        assert_eq!(harness.swim.calls().len(), 1);
    }
}
