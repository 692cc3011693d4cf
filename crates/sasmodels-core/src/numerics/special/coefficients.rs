//! Fitted coefficient tables for the Bessel-type approximations.
//!
//! Values are the published Cephes fits (full tables) and the reduced fits
//! used for single-precision kernels (compact tables). They are literal
//! constants and must not be re-derived or reformatted numerically: a change
//! in any digit changes scattering results. Tables are ordered from the
//! highest power down, as consumed by [`crate::numerics::polynomial`].
#![allow(clippy::excessive_precision)]

/// Numerator of the `|x| <= 5` rational factor of J0, degree 3 in `x^2`; trailing zeros are padding.
pub const J0_RATIONAL_NUMERATOR: [f64; 8] = [
    -4.79443220978201773821E9,
    1.95617491946556577543E12,
    -2.49248344360967716204E14,
    9.70862251047306323952E15,
    0.0,
    0.0,
    0.0,
    0.0,
];

/// Monic denominator of the `|x| <= 5` rational factor of J0, degree 8.
pub const J0_RATIONAL_DENOMINATOR: [f64; 8] = [
    4.99563147152651017219E2,
    1.73785401676374683123E5,
    4.84409658339962045305E7,
    1.11855537045356834862E10,
    2.11277520115489217587E12,
    3.10518229857422583814E14,
    3.18121955943204943306E16,
    1.71086294081043136091E18,
];

/// Hankel amplitude `P(z)` numerator for J0/Y0, degree 6 in `25/x^2`.
pub const J0_HANKEL_P_NUMERATOR: [f64; 8] = [
    7.96936729297347051624E-4,
    8.28352392107440799803E-2,
    1.23953371646414299388E0,
    5.44725003058768775090E0,
    8.74716500199817011941E0,
    5.30324038235394892183E0,
    9.99999999999999997821E-1,
    0.0,
];

/// Hankel amplitude `P(z)` denominator for J0/Y0, degree 6.
pub const J0_HANKEL_P_DENOMINATOR: [f64; 8] = [
    9.24408810558863637013E-4,
    8.56288474354474431428E-2,
    1.25352743901058953537E0,
    5.47097740330417105182E0,
    8.76190883237069594232E0,
    5.30605288235394617618E0,
    1.00000000000000000218E0,
    0.0,
];

/// Hankel amplitude `Q(z)` numerator for J0/Y0, degree 7.
pub const J0_HANKEL_Q_NUMERATOR: [f64; 8] = [
    -1.13663838898469149931E-2,
    -1.28252718670509318512E0,
    -1.95539544257735972385E1,
    -9.32060152123768231369E1,
    -1.77681167980488050595E2,
    -1.47077505154951170175E2,
    -5.14105326766599330220E1,
    -6.05014350600728481186E0,
];

/// Monic Hankel amplitude `Q(z)` denominator for J0/Y0, degree 7.
pub const J0_HANKEL_Q_DENOMINATOR: [f64; 8] = [
    6.43178256118178023184E1,
    8.56430025976980587198E2,
    3.88240183605401609683E3,
    7.24046774195652478189E3,
    5.93072701187316984827E3,
    2.06209331660327847417E3,
    2.42005740240291393179E2,
    0.0,
];

/// Numerator of the `x <= 5` rational part of Y0, degree 7 in `x^2`.
pub const Y0_RATIONAL_NUMERATOR: [f64; 8] = [
    1.55924367855235737965E4,
    -1.46639295903971606143E7,
    5.43526477051876500413E9,
    -9.82136065717911466409E11,
    8.75906394395366999549E13,
    -3.46628303384729719441E15,
    4.42733268572569800351E16,
    -1.84950800436986690637E16,
];

/// Monic denominator of the `x <= 5` rational part of Y0, degree 7.
pub const Y0_RATIONAL_DENOMINATOR: [f64; 7] = [
    1.04128353664259848412E3,
    6.26107330137134956842E5,
    2.68919633393814121987E8,
    8.64002487103935000337E10,
    2.02979612750105546709E13,
    3.17157752842975028269E15,
    2.50596256172653059228E17,
];

/// Compact J0 polynomial for `|x| <= 2`, degree 4 in `x^2`.
pub const J0_COMPACT_SERIES: [f64; 8] = [
    -6.068350350393235E-008,
    6.388945720783375E-006,
    -3.969646342510940E-004,
    1.332913422519003E-002,
    -1.729150680240724E-001,
    0.0,
    0.0,
    0.0,
];

/// Compact J0 asymptotic modulus, degree 7 in `1/x`.
pub const J0_COMPACT_MODULUS: [f64; 8] = [
    -6.838999669318810E-002,
    1.864949361379502E-001,
    -2.145007480346739E-001,
    1.197549369473540E-001,
    -3.560281861530129E-003,
    -4.969382655296620E-002,
    -3.355424622293709E-006,
    7.978845717621440E-001,
];

/// Compact J0 asymptotic phase, degree 7 in `1/x^2`.
pub const J0_COMPACT_PHASE: [f64; 8] = [
    3.242077816988247E+001,
    -3.630592630518434E+001,
    1.756221482109099E+001,
    -4.974978466280903E+000,
    1.001973420681837E+000,
    -1.939906941791308E-001,
    6.490598792654666E-002,
    -1.249992184872738E-001,
];

/// Numerator of the `|x| <= 5` rational factor of J1, degree 3 in `x^2`.
pub const J1_RATIONAL_NUMERATOR: [f64; 8] = [
    -8.99971225705559398224E8,
    4.52228297998194034323E11,
    -7.27494245221818276015E13,
    3.68295732863852883286E15,
    0.0,
    0.0,
    0.0,
    0.0,
];

/// Monic denominator of the `|x| <= 5` rational factor of J1, degree 8.
pub const J1_RATIONAL_DENOMINATOR: [f64; 8] = [
    6.20836478118054335476E2,
    2.56987256757748830383E5,
    8.35146791431949253037E7,
    2.21511595479792499675E10,
    4.74914122079991414898E12,
    7.84369607876235854894E14,
    8.95222336184627338078E16,
    5.32278620332680085395E18,
];

/// Hankel amplitude `P(z)` numerator for J1, degree 6 in `25/x^2`.
pub const J1_HANKEL_P_NUMERATOR: [f64; 8] = [
    7.62125616208173112003E-4,
    7.31397056940917570436E-2,
    1.12719608129684925192E0,
    5.11207951146807644818E0,
    8.42404590141772420927E0,
    5.21451598682361504063E0,
    1.00000000000000000254E0,
    0.0,
];

/// Hankel amplitude `P(z)` denominator for J1, degree 6.
pub const J1_HANKEL_P_DENOMINATOR: [f64; 8] = [
    5.71323128072548699714E-4,
    6.88455908754495404082E-2,
    1.10514232634061696926E0,
    5.07386386128601488557E0,
    8.39985554327604159757E0,
    5.20982848682361821619E0,
    9.99999999999999997461E-1,
    0.0,
];

/// Hankel amplitude `Q(z)` numerator for J1, degree 7.
pub const J1_HANKEL_Q_NUMERATOR: [f64; 8] = [
    5.10862594750176621635E-2,
    4.98213872951233449420E0,
    7.58238284132545283818E1,
    3.66779609360150777800E2,
    7.10856304998926107277E2,
    5.97489612400613639965E2,
    2.11688757100572135698E2,
    2.52070205858023719784E1,
];

/// Monic Hankel amplitude `Q(z)` denominator for J1, degree 7.
pub const J1_HANKEL_Q_DENOMINATOR: [f64; 8] = [
    7.42373277035675149943E1,
    1.05644886038262816351E3,
    4.98641058337653607651E3,
    9.56231892404756170795E3,
    7.99704160447350683650E3,
    2.82619278517639096600E3,
    3.36093607810698293419E2,
    0.0,
];

/// Compact J1 polynomial for `|x| <= 2`, degree 4 in `x^2`.
pub const J1_COMPACT_SERIES: [f64; 8] = [
    -4.878788132172128E-009,
    6.009061827883699E-007,
    -4.541343896997497E-005,
    1.937383947804541E-003,
    -3.405537384615824E-002,
    0.0,
    0.0,
    0.0,
];

/// Compact J1 asymptotic modulus, degree 7 in `1/x`.
pub const J1_COMPACT_MODULUS: [f64; 8] = [
    6.913942741265801E-002,
    -2.284801500053359E-001,
    3.138238455499697E-001,
    -2.102302420403875E-001,
    5.435364690523026E-003,
    1.493389585089498E-001,
    4.976029650847191E-006,
    7.978845453073848E-001,
];

/// Compact J1 asymptotic phase, degree 7 in `1/x^2`.
pub const J1_COMPACT_PHASE: [f64; 8] = [
    -4.497014141919556E+001,
    5.073465654089319E+001,
    -2.485774108720340E+001,
    7.222973196770240E+000,
    -1.544842782180211E+000,
    3.503787691653334E-001,
    -1.637986776941202E-001,
    3.749989509080821E-001,
];
/// Taylor series of `3 j1(x)/x` in `x^2` through the `x^10` term.
pub const SPH_J1C_TAYLOR: [f64; 5] = [
    3.0 / 3991680.0,
    -3.0 / 45360.0,
    3.0 / 840.0,
    -3.0 / 30.0,
    1.0,
];

/// Lanczos series coefficients (g = 5, six terms) for `ln Gamma`.
pub const LANCZOS_SERIES: [f64; 6] = [
    76.18009172947146,
    -86.50532032941677,
    24.01409824083091,
    -1.231739572450155,
    0.1208650973866179e-2,
    -0.5395239384953e-5,
];

pub const LANCZOS_SERIES_SEED: f64 = 1.000000000190015;
pub const LANCZOS_SQRT_TWO_PI: f64 = 2.5066282746310005;
