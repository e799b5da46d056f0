use super::{Benchmark, Suite::Cpu2006};

pub(super) static BENCHMARKS: &[Benchmark] = &[
    Benchmark::new(400, Cpu2006, "perlbench", "perlbench", "400.perlbench",
        "-I./lib diffmail.pl 4 800 10 17 19 300", Some(8646)),
    Benchmark::new(401, Cpu2006, "bzip2", "bzip2", "401.bzip2",
        "chicken.jpg 30", Some(3078)),
    Benchmark::new(403, Cpu2006, "gcc", "gcc", "403.gcc",
        "166.i -o 166.s", Some(5681)),
    Benchmark::new(410, Cpu2006, "bwaves", "bwaves", "410.bwaves",
        "", Some(195834)),
    Benchmark::new(416, Cpu2006, "gamess", "gamess", "416.gamess",
        "", Some(52844))
        .input("cytosine.2.config"),
    Benchmark::new(429, Cpu2006, "mcf", "mcf", "429.mcf",
        "inp.in", Some(24182)),
    Benchmark::new(433, Cpu2006, "milc", "milc", "433.milc",
        "", Some(42171))
        .input("su3imp.in"),
    Benchmark::new(434, Cpu2006, "zeusmp", "zeusmp", "434.zeusmp",
        "", Some(143391)),
    Benchmark::new(435, Cpu2006, "gromacs", "gromacs", "435.gromacs",
        "", Some(73566)),
    Benchmark::new(436, Cpu2006, "cactusADM", "cactusADM", "436.cactusADM",
        "benchADM.par", Some(41811)),
    Benchmark::new(437, Cpu2006, "leslie3d", "leslie3d", "437.leslie3d",
        "", Some(102866))
        .input("leslie3d.in"),
    Benchmark::new(444, Cpu2006, "namd", "namd", "444.namd",
        "--input namd.input --iterations 38", Some(14239)),
    Benchmark::new(445, Cpu2006, "gobmk", "gobmk", "445.gobmk",
        "--quiet --mode gtp", Some(2922))
        .input("13x13.tst"),
    Benchmark::new(450, Cpu2006, "soplex", "soplex", "450.soplex",
        "-m3500 ref.mps", Some(3988)),
    Benchmark::new(453, Cpu2006, "povray", "povray", "453.povray",
        "SPEC-benchmark-ref.ini", Some(61412)),
    Benchmark::new(454, Cpu2006, "calculix", "calculix", "454.calculix",
        "-i hyperviscoplastic", Some(210709)),
    Benchmark::new(456, Cpu2006, "hmmer", "hmmer", "456.hmmer",
        "nph3.hmm swiss41", Some(6286)),
    Benchmark::new(458, Cpu2006, "sjeng", "sjeng", "458.sjeng",
        "ref.txt", Some(134141)),
    Benchmark::new(459, Cpu2006, "GemsFDTD", "GemsFDTD", "459.GemsFDTD",
        "", Some(131941)),
    Benchmark::new(462, Cpu2006, "libquantum", "libquantum", "462.libquantum",
        "1297 8", Some(41938)),
    Benchmark::new(464, Cpu2006, "h264ref", "h264ref", "464.h264ref",
        "-d foreman_ref_encoder_baseline.cfg", Some(4289)),
    Benchmark::new(465, Cpu2006, "tonto", "tonto", "465.tonto",
        "", Some(23)),
    Benchmark::new(470, Cpu2006, "lbm", "lbm", "470.lbm",
        "3000 reference.dat 0 0 100_100_130_ldc.of", Some(1820)),
    Benchmark::new(471, Cpu2006, "omnetpp", "omnetpp", "471.omnetpp",
        "omnetpp.ini", Some(34112)),
    Benchmark::new(473, Cpu2006, "astar", "astar", "473.astar",
        "rivers.cfg", Some(18680)),
    Benchmark::new(481, Cpu2006, "wrf", "wrf", "481.wrf",
        "", Some(228382))
        .unavailable("can't run in simulation"),
    Benchmark::new(482, Cpu2006, "sphinx3", "sphinx_livepretend", "482.sphinx3",
        "ctlfile . args.an4", Some(96412)),
    Benchmark::new(483, Cpu2006, "xalancbmk", "xalancbmk", "483.xalancbmk",
        "-v test.xml xalanc.xsl", None)
        .unavailable("checkpoints not ready"),
];
