//! Static log file corpora used across harnesses.
//!
//! Each corpus is the full text of a log file as an older release would have
//! left it: the single-file layout in the working directory, the `sub/`
//! layout, and a hand-edited file with junk lines mixed in.

/// Header written by the single-file release, before columns were renamed.
pub const OLD_HEADER: &str = "\
# NeuroGames Program Execution Log
# Aufrufnummer\tDatum\tZeit\tDateiname\tDateipfad
#================================================================================
";

/// The single-file layout: `program_log.txt` in the working directory.
pub const ROOT_LEGACY_LOG: &str = "\
# NeuroGames Program Execution Log
# Aufrufnummer\tDatum\tZeit\tDateiname\tDateipfad
#================================================================================
4\t2025-10-08\t14:31:02\tpdf.py\t/home/ada/neurogames/pdf.py
3\t2025-10-08\t14:30:51\tmain.py\t/home/ada/neurogames/main.py
2\t2025-10-08\t14:30:25\tlog.py\t/home/ada/neurogames/log.py
1\t2025-10-08\t14:29:59\tmain.py\t/home/ada/neurogames/main.py
";

/// The `sub/` layout. Sequence 3 is the same logical entry as in
/// [`ROOT_LEGACY_LOG`] (copied during a migration, with a different path).
pub const SUB_LEGACY_LOG: &str = "\
# NeuroGames Program Execution Log
7\t2025-10-09\t09:12:40\tpdf.py\t/home/ada/neurogames/sub/pdf.py
6\t2025-10-09\t09:10:03\tpdf.py
3\t2025-10-08\t14:30:51\tmain.py\t/home/ada/neurogames/sub/main.py
";

/// Valid lines interleaved with everything a scan must step over.
pub const MALFORMED_LOG: &str = "\
# hand edited
abc\tbad\tdata
12\t2025-10-10\t08:00:00\tmain.py\t/home/ada/neurogames/main.py

   \t
not a log line at all
11\t2025-10-10
0\t2025-10-10\t07:59:00\tzero.py\t/zero.py
-4\t2025-10-10\t07:58:00\tneg.py\t/neg.py
10\t2025-10-10\t07:50:00\tpdf.py
";

/// Sequence numbers of the valid entries in [`MALFORMED_LOG`].
pub const MALFORMED_LOG_VALID: &[u64] = &[12, 10];

/// Sequence numbers of every distinct logical entry in the two legacy corpora,
/// newest first.
pub const LEGACY_SEQUENCES: &[u64] = &[7, 6, 4, 3, 2, 1];
