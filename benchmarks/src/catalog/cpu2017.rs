use super::{Benchmark, Suite::Cpu2017};

pub(super) static BENCHMARKS: &[Benchmark] = &[
    Benchmark::new(500, Cpu2017, "perlbench_r", "perlbench_r", "500.perlbench_r",
        "-I./lib splitmail.pl 6400 12 26 16 100 0", Some(25489)),
    Benchmark::new(502, Cpu2017, "gcc_r", "cpugcc_r", "502.gcc_r",
        "ref32.c -O3 -fselective-scheduling -fselective-scheduling2", Some(2077))
        .output(
            "ref32.opts-O3_-fselective-scheduling_-fselective-scheduling2.s",
            "ref32.opts-O3_-fselective-scheduling_-fselective-scheduling2.err",
        ),
    Benchmark::new(503, Cpu2017, "bwaves_r", "bwaves_r", "503.bwaves_r",
        "bwaves_1", Some(22745))
        .input("bwaves_4.in"),
    Benchmark::new(505, Cpu2017, "mcf_r", "mcf_r", "505.mcf_r",
        "inp.in", Some(41104)),
    Benchmark::new(507, Cpu2017, "cactuBSSN_r", "cactuBSSN_r", "507.cactuBSSN_r",
        "spec_ref.par", Some(1235)),
    Benchmark::new(508, Cpu2017, "namd_r", "namd_r", "508.namd_r",
        "--input apoa1.input --output apoa1.ref.output --iterations 65", Some(31873)),
    // simpoints need to be regenerated
    Benchmark::new(510, Cpu2017, "parest_r", "parest_r", "510.parest_r",
        "ref.prm", None),
    Benchmark::new(511, Cpu2017, "povray_r", "povray_r", "511.povray_r",
        "SPEC-benchmark-ref.ini", Some(9688)),
    Benchmark::new(519, Cpu2017, "lbm_r", "lbm_r", "519.lbm_r",
        "3000 reference.dat 0 0 100_100_130_ldc.of", Some(22184)),
    Benchmark::new(520, Cpu2017, "omnetpp_r", "omnetpp_r", "520.omnetpp_r",
        "-c General -r 0", Some(79014)),
    Benchmark::new(521, Cpu2017, "wrf_r", "wrf_r", "521.wrf_r",
        "", Some(4488)),
    Benchmark::new(523, Cpu2017, "xalancbmk_r", "xalancbmk_r", "523.xalancbmk_r",
        "-v t5.xml xalanc.xsl", Some(12499)),
    Benchmark::new(525, Cpu2017, "x264_r", "x264_r", "525.x264_r",
        "--seek 500 --dumpyuv 200 --frames 1250 -o BuckBunny_New.264 BuckBunny.yuv 1280x720",
        Some(31334)),
    Benchmark::new(526, Cpu2017, "blender_r", "blender_r", "526.blender_r",
        "sh3_no_char.blend --render-output sh3_no_char_ --threads 1 -b -F RAWTGA -s 849 -e 849 -a",
        Some(41602)),
    Benchmark::new(527, Cpu2017, "cam4_r", "cam4_r", "527.cam4_r",
        "", Some(38))
        .unavailable("checkpoints not ready"),
    Benchmark::new(531, Cpu2017, "deepsjeng_r", "deepsjeng_r", "531.deepsjeng_r",
        "ref.txt", Some(11356)),
    Benchmark::new(538, Cpu2017, "imagick_r", "imagick_r", "538.imagick_r",
        "-limit disk 0 refrate_input.tga -edge 41 -resample 181% -emboss 31 -colorspace YUV \
         -mean-shift 19x19+15% -resize 30% refrate_output.tga",
        Some(3185)),
    Benchmark::new(541, Cpu2017, "leela_r", "leela_r", "541.leela_r",
        "ref.sgf", Some(9221)),
    Benchmark::new(544, Cpu2017, "nab_r", "nab_r", "544.nab_r",
        "1am0 1122214447 122", Some(56451)),
    Benchmark::new(548, Cpu2017, "exchange2_r", "exchange2_r", "548.exchange2_r",
        "6", Some(26999)),
    Benchmark::new(549, Cpu2017, "fotonik3d_r", "fotonik3d_r", "549.fotonik3d_r",
        "", Some(37327)),
    Benchmark::new(554, Cpu2017, "roms_r", "roms_r", "554.roms_r",
        "", None)
        .input("ocean_benchmark2.in.x")
        .unavailable("checkpoints not ready"),
    Benchmark::new(557, Cpu2017, "xz_r", "xz_r", "557.xz_r",
        "input.combined.xz 250 \
         a841f68f38572a49d86226b7ff5baeb31bd19dc637a922a972b2e6d1257a890f6a544ecab967c313e370478c74f760eb229d4eef8a8d2836d233d3e9dd1430bf \
         40401484 41217675 7",
        Some(19372)),
];
