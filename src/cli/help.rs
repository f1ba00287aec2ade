//! Static help, banner and citation texts

/// Top-level usage listing with the known commands
#[must_use]
pub fn top_level_help(version: &str) -> String {
    let mut help = format!("salmon v{version}\n\n");
    help.push_str(
        "Usage:  salmon -h|--help or \n\
        \x20       salmon -v|--version or \n\
        \x20       salmon -c|--cite or \n\
        \x20       salmon [--no-version-check] <COMMAND> [-h | options]\n\n",
    );
    help.push_str("Commands:\n");
    help.push_str("     index      : create a salmon index\n");
    help.push_str("     quant      : quantify a sample\n");
    help.push_str("     alevin     : single cell analysis\n");
    help.push_str("     swim       : perform super-secret operation\n");
    help.push_str("     quantmerge : merge multiple quantifications into a single file\n");
    help
}

/// Version line printed for `-v`/`--version`
#[must_use]
pub fn version_line(version: &str) -> String {
    format!("salmon {version}\n")
}

const DUAL_MODE_BODY: &str = r"
    ===============

    salmon quant has two modes --- one quantifies expression using raw reads
    and the other makes use of already-aligned reads (in BAM/SAM format).
    Which algorithm is used depends on the arguments passed to salmon quant.
    If you provide salmon with alignments '-a [ --alignments ]' then the
    alignment-based algorithm will be used, otherwise the algorithm for
    quantifying from raw reads will be used.

    to view the help for salmon's selective-alignment-based mode, use the command

    salmon quant --help-reads

    To view the help for salmon's alignment-based mode, use the command

    salmon quant --help-alignment

    ";

/// Banner explaining how `salmon quant` picks between its two modes
#[must_use]
pub fn dual_mode_banner(version: &str) -> String {
    format!("    salmon v{version}{DUAL_MODE_BODY}\n")
}

/// Citation block: plain-text reference followed by a BibTeX entry
pub const CITATION: &str = r"
If you use salmon in your research, please cite the publication in any
papers, pre-prints or reports.  The proper citation information for salmon
appears below.

Reference:
==========

Rob Patro, Geet Duggal, Michael I. Love, Rafael A. Irizarry, Carl Kingsford.
Salmon provides fast and bias-aware quantification of transcript expression.
Nature Methods. 2017;14(4):417-419. doi: 10.1038/nmeth.4197

bibtex:
=======

@article{Patro2017Salmon,
  doi = {10.1038/nmeth.4197},
  url = {https://doi.org/10.1038%2Fnmeth.4197},
  year  = {2017},
  month = {mar},
  publisher = {{Springer Nature}},
  volume = {14},
  number = {4},
  pages = {417--419},
  author = {Rob Patro and Geet Duggal and Michael I Love and Rafael A Irizarry and Carl Kingsford},
  title = {Salmon provides fast and bias-aware quantification of transcript expression},
  journal = {{Nature Methods}}
}
";

/// Bonus!
pub const SWIM_BANNER: &str = r"
    _____       __
   / ___/____ _/ /___ ___  ____  ____
   \__ \/ __ `/ / __ `__ \/ __ \/ __ \
  ___/ / /_/ / / / / / / / /_/ / / / /
 /____/\__,_/_/_/ /_/ /_/\____/_/ /_/


";
