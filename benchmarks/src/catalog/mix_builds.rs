use super::MixBuild;

// Options split by line continuations are rejoined, the xz hash included.
pub(super) static MIX_BUILDS: &[MixBuild] = &[
    MixBuild::new(500, "perlbench_r", "-I lib checkspam.pl 2500 5 25 11 150 1 1 1 1"),
    MixBuild::new(502, "cpugcc_r", "gcc-pp.c -O3 -finline-limit=0 -fif-conversion -fif-conversion2 -o gcc-pp.s"),
    MixBuild::new(503, "bwaves_r", "bwaves_1").input("bwaves_1.in"),
    MixBuild::new(505, "mcf_r", "inp.in"),
    MixBuild::new(507, "cactusBSSN_r", "spec_ref.par"),
    MixBuild::new(508, "namd_r", "--input apoa1.input --output apoa1.ref.output --iterations 65"),
    MixBuild::new(510, "parest_r", "ref.prm"),
    MixBuild::new(511, "povray_r", "SPEC-benchmark-ref.ini"),
    MixBuild::new(519, "lbm_r", "3000 reference.dat 0 0 100_100_130_ldc.of"),
    MixBuild::new(520, "omnetpp_r", "-c General -r 0"),
    MixBuild::new(521, "wrf_r", ""),
    MixBuild::new(523, "cpuxalan_r", "-v t5.xml xalanc.xsl"),
    MixBuild::new(525, "x264_r",
        "--pass 1 --stats x264_stats.log --bitrate 1000 --frames 1000 -o BuckBunny_New.264 BuckBunny.yuv 1280x720"),
    MixBuild::new(526, "blender_r",
        "sh3_no_char.blend --render-output sh3_no_char_ --threads 1 -b -F RAWTGA -s 849 -e 849 -a"),
    MixBuild::new(527, "cam4_r", ""),
    MixBuild::new(531, "deepsjeng_r", "ref.txt"),
    MixBuild::new(538, "imagick_r",
        "-limit disk 0 refrate_input.tga -edge 41 -resample 181% -emboss 31 -colorspace YUV \
         -mean-shift 19x19+15% -resize 30% refrate_output.tga"),
    MixBuild::new(541, "leela_r", "ref.sgf"),
    MixBuild::new(544, "nab_r", "1am0 1122214447 122"),
    MixBuild::new(548, "exchange2_r", "6"),
    MixBuild::new(549, "fotonik3d_r", ""),
    MixBuild::new(554, "roms_r", "").input("ocean_benchmark2.in.x"),
    MixBuild::new(557, "xz_r",
        "cld.tar.xz 160 19cf30ae51eddcbefda78dd06014b4b96281456e078ca7c13e1c0c9e6aaea8dff3efb4ad6b0456697718cede6bd5454852652806a657bb56e07d61128434b474 59796407 61004416 6"),
];
