//! Measured results of the IPC benchmark sweep.
//!
//! Counters come from `perf stat` over 30 s runs of each client/server pair;
//! rates and latencies from the client-side report. Rows keyed by thread
//! count list message sizes 512, 1024, 2048, 4096; latency rows keyed by
//! message size list thread counts 1, 2, 4, 8.

use crate::core::dataset::{MetricMeta, MetricSweepDataset, SweepTable};
use crate::core::derived;
use crate::core::error::DatasetError;
use crate::core::sweep::SweepDomain;
use crate::core::sweep::Variant::{OneCopy, TwoCopy, ZeroCopy};

/// LLC load misses, raw counts.
pub fn llc_misses() -> Result<MetricSweepDataset, DatasetError> {
    let table = SweepTable::by_thread_count()
        .row(TwoCopy, 1, &[1_182_965.0, 1_650_106.0, 38_389_687.0, 202_979_544.0])
        .row(TwoCopy, 2, &[4_553_536.0, 5_806_962.0, 151_830_844.0, 241_303_311.0])
        .row(TwoCopy, 4, &[15_493_195.0, 54_462_383.0, 474_399_924.0, 277_005_689.0])
        .row(TwoCopy, 8, &[60_807_549.0, 430_487_024.0, 2_037_412_624.0, 2_504_800_793.0])
        .row(OneCopy, 1, &[9_077_044.0, 40_893_048.0, 37_951_639.0, 34_360_883.0])
        .row(OneCopy, 2, &[16_695_155.0, 59_978_462.0, 91_732_892.0, 48_207_474.0])
        .row(OneCopy, 4, &[336_230_420.0, 1_524_378_406.0, 2_313_540_259.0, 2_327_336_042.0])
        .row(OneCopy, 8, &[731_889_262.0, 1_694_690_824.0, 2_328_728_464.0, 2_497_613_019.0])
        .row(ZeroCopy, 1, &[8_446_393.0, 31_250_748.0, 66_533_862.0, 32_318_453.0])
        .row(ZeroCopy, 2, &[35_742_267.0, 118_117_234.0, 508_736_169.0, 103_599_845.0])
        .row(ZeroCopy, 4, &[944_055_814.0, 672_884_060.0, 1_946_458_979.0, 1_731_823_961.0])
        .row(ZeroCopy, 8, &[2_226_755_894.0, 2_926_282_126.0, 2_961_186_130.0, 3_276_203_920.0]);
    MetricSweepDataset::from_table(
        MetricMeta::new("llc_misses", "misses", "LLC Cache Misses"),
        SweepDomain::standard(),
        &table,
    )
}

/// Total CPU cycles over the run.
pub fn cpu_cycles() -> Result<MetricSweepDataset, DatasetError> {
    let table = SweepTable::by_thread_count()
        .row(TwoCopy, 1, &[211_972_758_136.0, 209_865_235_132.0, 194_443_371_119.0, 192_751_235_490.0])
        .row(TwoCopy, 2, &[388_916_874_569.0, 368_497_953_176.0, 337_956_256_754.0, 327_036_825_302.0])
        .row(TwoCopy, 4, &[659_712_356_290.0, 621_378_449_506.0, 585_842_552_895.0, 545_330_766_760.0])
        .row(TwoCopy, 8, &[858_911_564_665.0, 790_173_513_239.0, 942_951_103_264.0, 1_047_858_119_940.0])
        .row(OneCopy, 1, &[190_851_730_358.0, 163_707_030_611.0, 177_415_908_932.0, 158_035_962_299.0])
        .row(OneCopy, 2, &[371_372_169_984.0, 357_231_665_368.0, 332_554_573_474.0, 303_691_406_521.0])
        .row(OneCopy, 4, &[663_679_652_696.0, 732_496_403_523.0, 747_554_396_518.0, 710_957_329_903.0])
        .row(OneCopy, 8, &[857_823_781_113.0, 934_431_950_840.0, 979_882_088_948.0, 1_107_195_540_797.0])
        .row(ZeroCopy, 1, &[140_600_647_661.0, 150_327_361_919.0, 144_546_297_574.0, 138_837_854_419.0])
        .row(ZeroCopy, 2, &[309_968_903_000.0, 280_619_437_001.0, 253_569_647_207.0, 273_676_432_100.0])
        .row(ZeroCopy, 4, &[565_993_476_664.0, 470_191_312_495.0, 554_197_719_906.0, 569_069_013_764.0])
        .row(ZeroCopy, 8, &[884_767_384_962.0, 1_281_235_539_363.0, 990_970_229_343.0, 1_373_147_392_890.0]);
    MetricSweepDataset::from_table(
        MetricMeta::new("cpu_cycles", "cycles", "CPU Cycles"),
        SweepDomain::standard(),
        &table,
    )
}

/// Total bytes moved over the run.
pub fn total_bytes() -> Result<MetricSweepDataset, DatasetError> {
    let table = SweepTable::by_thread_count()
        .row(TwoCopy, 1, &[48_253_067_264.0, 82_056_028_160.0, 105_233_563_648.0, 132_536_336_384.0])
        .row(TwoCopy, 2, &[71_370_866_688.0, 119_849_779_200.0, 150_949_756_928.0, 212_232_929_280.0])
        .row(TwoCopy, 4, &[104_557_899_776.0, 170_908_221_440.0, 242_388_746_240.0, 339_221_741_568.0])
        .row(TwoCopy, 8, &[120_123_695_104.0, 181_609_406_464.0, 206_836_269_056.0, 212_086_521_856.0])
        .row(OneCopy, 1, &[116_449_026_048.0, 140_897_386_496.0, 196_207_362_048.0, 208_471_392_256.0])
        .row(OneCopy, 2, &[184_251_539_456.0, 245_645_631_488.0, 300_002_312_192.0, 325_498_994_688.0])
        .row(OneCopy, 4, &[217_813_970_944.0, 208_372_211_712.0, 183_600_250_880.0, 225_850_195_968.0])
        .row(OneCopy, 8, &[184_813_616_266.0, 197_880_312_565.0, 201_218_627_701.0, 201_131_848_861.0])
        .row(ZeroCopy, 1, &[88_763_437_056.0, 118_586_540_032.0, 124_142_829_568.0, 146_216_583_168.0])
        .row(ZeroCopy, 2, &[148_522_598_400.0, 181_170_315_264.0, 160_396_083_200.0, 240_141_893_632.0])
        .row(ZeroCopy, 4, &[194_582_167_499.0, 228_641_578_955.0, 161_282_653_996.0, 262_818_168_832.0])
        .row(ZeroCopy, 8, &[167_911_235_266.0, 171_633_622_775.0, 176_817_683_314.0, 182_043_770_297.0]);
    MetricSweepDataset::from_table(
        MetricMeta::new("total_bytes", "bytes", "Total Bytes"),
        SweepDomain::standard(),
        &table,
    )
}

/// Cycles per byte, recomputed from the raw counters.
pub fn cycles_per_byte() -> Result<MetricSweepDataset, DatasetError> {
    derived::cycles_per_byte(&cpu_cycles()?, &total_bytes()?)
}

/// Mean message latency in microseconds.
pub fn latency_us() -> Result<MetricSweepDataset, DatasetError> {
    let table = SweepTable::by_message_size()
        .row(TwoCopy, 512, &[2.55, 1.72, 1.18, 1.02])
        .row(TwoCopy, 1024, &[3.00, 2.05, 1.44, 1.35])
        .row(TwoCopy, 2048, &[4.67, 3.26, 2.03, 2.38])
        .row(TwoCopy, 4096, &[7.42, 4.63, 2.90, 4.64])
        .row(OneCopy, 512, &[1.06, 0.67, 0.56, 0.66])
        .row(OneCopy, 1024, &[1.74, 1.00, 1.18, 1.24])
        .row(OneCopy, 2048, &[2.51, 1.64, 2.68, 2.44])
        .row(OneCopy, 4096, &[4.71, 3.02, 4.33, 4.89])
        .row(ZeroCopy, 512, &[1.38, 0.83, 0.63, 0.73])
        .row(ZeroCopy, 1024, &[2.07, 1.36, 1.07, 1.43])
        .row(ZeroCopy, 2048, &[3.95, 3.05, 3.04, 2.78])
        .row(ZeroCopy, 4096, &[6.71, 4.07, 3.72, 5.40]);
    MetricSweepDataset::from_table(
        MetricMeta::new("latency_us", "µs", "Message Latency"),
        SweepDomain::standard(),
        &table,
    )
}

/// Network throughput in Gbit/s.
pub fn throughput_gbps() -> Result<MetricSweepDataset, DatasetError> {
    let table = SweepTable::by_thread_count()
        .row(TwoCopy, 1, &[12.867482, 21.881606, 28.062282, 35.343017])
        .row(TwoCopy, 2, &[19.032230, 31.959941, 40.253261, 56.595446])
        .row(TwoCopy, 4, &[27.882105, 45.575520, 64.636987, 90.459078])
        .row(TwoCopy, 8, &[32.031218, 48.429173, 55.156315, 56.556364])
        .row(OneCopy, 1, &[31.053073, 37.572633, 52.321959, 55.592369])
        .row(OneCopy, 2, &[49.133742, 65.505499, 80.000589, 86.799721])
        .row(OneCopy, 4, &[58.083719, 55.565918, 48.960052, 60.226676])
        .row(OneCopy, 8, &[49.283623, 52.768007, 53.658288, 53.635135])
        .row(ZeroCopy, 1, &[23.670250, 31.623075, 33.104753, 38.991085])
        .row(ZeroCopy, 2, &[39.606024, 48.312073, 42.772196, 64.037822])
        .row(ZeroCopy, 4, &[51.888326, 60.970831, 42.899810, 69.858118])
        .row(ZeroCopy, 8, &[44.598725, 45.699746, 47.142679, 48.545002]);
    MetricSweepDataset::from_table(
        MetricMeta::new("throughput_gbps", "Gbps", "Network I/O Throughput"),
        SweepDomain::standard(),
        &table,
    )
}
