//! Fixed rigid-body relationships between paired or consecutive residues.
//!
//! Derived from idealized A-form RNA geometry; consumed by the placement
//! generators, never computed at run time.

use std::sync::LazyLock;

use crate::core::geometry::Transform;

/// Watson-Crick pairing: half-turn about an in-plane axis plus the
/// cross-strand displacement.
pub(crate) static WC: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        -1.0, -1.0166823084556566e-16, -6.827275198314002e-17,
        1.0166823084556566e-16, -0.3784113006312989, -0.9256375573379296,
        6.827275198314002e-17, -0.9256375573379296, 0.37841130063129924,
        -0.012, 5.101, 8.636,
    )
});

/// Watson-Crick pairing, Dumas parameterization: the flip axis is
/// tilted slightly out of the base plane.
pub(crate) static WC_DUMAS: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        -0.9983260484949437, 0.0002751088212454636, -0.05783619292111124,
        0.052852783437754514, -0.4017631141266126, -0.914217142373828,
        -0.02348795817761404, -0.9157435909917268, 0.4010760418900927,
        0.041, 6.788, 6.151,
    )
});

/// One helical step towards the 5' neighbour.
pub(crate) static HELIX5P: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        0.9658205621038352, -0.11357598078318658, -0.23300458881011146,
        0.24164520908736054, 0.7197819220661911, 0.6507853544693715,
        0.09379890587079195, -0.6848463194438857, 0.7226252721858027,
        1.4232397147394145, 3.2537971145171802, -2.2058460070638315,
    )
});

/// One helical step towards the 3' neighbour. Close to, but not
/// exactly, the inverse of [`HELIX5P`].
pub(crate) static HELIX3P: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        0.9673901446260644, 0.2400134666845835, 0.0809311058271821,
        -0.11207509604347916, 0.6921462915976836, -0.7130025833574652,
        -0.22714638655987274, 0.6806813107744495, 0.6964750334614803,
        -0.49321613731342584, -2.570131107916413, 3.974269285594116,
    )
});

/// Non-helical stacking offset chained onto a 5' helical step.
pub(crate) static STACKED5P: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        0.9894368804507608, -0.08409350181274411, -0.11808023779082089,
        0.13161812799672806, 0.862513737838656, 0.488617151174851,
        0.060756299973778065, -0.49899732964461857, 0.864471131398288,
        0.15493890771805452, 1.2480929250955293, -1.4511448957320643,
    )
});

/// Non-helical stacking offset chained onto a 3' helical step.
pub(crate) static STACKED3P: LazyLock<Transform> = LazyLock::new(|| {
    Transform::from_coefficients(
        0.9847850727982393, 0.15065290411927826, 0.08661444956930504,
        -0.07872319192870034, 0.8311036690321499, -0.5505173479317937,
        -0.15492262406221738, 0.5353227006224621, 0.8303183646963077,
        -0.6691505040174981, -2.8137583665922543, 2.4751052327158023,
    )
});
