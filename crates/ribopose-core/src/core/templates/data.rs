//! Coordinate and transform tables for the built-in template library.
//!
//! Idealized geometry: every template satisfies the canonical base
//! frame convention, its standard-frame transform is exact for its
//! own atoms, and the backbone rotamer transforms place a successor
//! P exactly one P-O3' bond away from the predecessor O3'.

use nalgebra::Point3;

use crate::core::geometry::Transform;
use crate::core::models::template::{
    AdenineAtoms, BasePayload, CommonAtoms, CytosineAtoms, GuanineAtoms,
    NucleotideTemplate, UracilAtoms,
};

pub(super) fn builtin_templates() -> Vec<NucleotideTemplate> {
    vec![
        template_a(),
        template_a01(),
        template_a02(),
        template_a03(),
        template_c(),
        template_c01(),
        template_c02(),
        template_c03(),
        template_g(),
        template_g01(),
        template_g02(),
        template_g03(),
        template_u(),
        template_u01(),
        template_u02(),
        template_u03(),
    ]
}

fn template_a() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "A",
        Transform::from_coefficients(
            0.9438892412574585, -0.21993391295492246, 0.24637811219902606,
            0.24261600637706127, 0.9679119210688975, -0.06545216957719738,
            -0.22407716012138545, 0.12155487232132255, 0.9669611364097743,
            -6.416016325091655, -3.9119530028949847, 4.092237093485457,
        ),
        Transform::from_coefficients(
            -0.9184742601816802, -0.20401502195477594, -0.33879625765422455,
            0.195865051662156, -0.9788859933289367, 0.0584730160142405,
            -0.34357228485588925, -0.012652386384118613, 0.9390410013400322,
            2.747647214921443, 2.7338028881880416, 12.228294448132129,
        ),
        Transform::from_coefficients(
            0.7580794781340057, -0.44533120360930545, -0.4764405775371796,
            0.6133516841397754, 0.23859184679569678, 0.7529101156217253,
            -0.2216195307164402, -0.8629913381572876, 0.454016226439671,
            -8.67725990727423, -6.187381924317234, 7.139740470324776,
        ),
        Transform::from_coefficients(
            0.5544440852306468, 0.7988688879173973, 0.2332386251682435,
            -0.6315332054188152, 0.22135676540676835, 0.7430793987603809,
            0.5419940652868696, -0.5592939140794166, 0.6272421788014086,
            2.586390904223859, -11.9611904734343, 3.8464182180468236,
        ),
        CommonAtoms {
            p: Point3::new(6.9165, 2.2764, -9.1949),
            op1: Point3::new(7.4249, 3.5372, -9.7925),
            op2: Point3::new(5.8335, 1.6706, -10.0105),
            o5p: Point3::new(6.3065, 2.6293, -7.7641),
            c5p: Point3::new(5.3347, 3.6812, -7.6135),
            h5p: Point3::new(5.7860, 4.6344, -7.8887),
            h5pp: Point3::new(4.4909, 3.4935, -8.2775),
            c4p: Point3::new(4.8461, 3.7494, -6.1864),
            h4p: Point3::new(4.3965, 2.7886, -5.9358),
            o4p: Point3::new(3.9695, 4.9043, -6.1665),
            c1p: Point3::new(4.1874, 5.6109, -4.9192),
            h1p: Point3::new(3.2844, 5.6514, -4.3101),
            c2p: Point3::new(5.1986, 4.8926, -4.1681),
            h2pp: Point3::new(5.9078, 5.5919, -3.7252),
            o2p: Point3::new(4.5998, 4.1465, -3.1324),
            h2p: Point3::new(4.1717, 3.3748, -3.5104),
            c3p: Point3::new(5.9053, 3.9728, -5.1342),
            h3p: Point3::new(6.7890, 4.3131, -5.6740),
            o3p: Point3::new(6.5213, 2.9123, -4.4125),
            n1: Point3::new(5.0312, 6.0184, -0.9242),
            n3: Point3::new(4.6945, 5.2583, -3.1652),
            c2: Point3::new(5.0690, 5.0059, -1.8612),
            c4: Point3::new(4.2822, 6.5231, -3.5322),
            c5: Point3::new(4.2444, 7.5356, -2.5952),
            c6: Point3::new(4.6189, 7.2832, -1.2912),
        },
        BasePayload::Adenine(AdenineAtoms {
            n6: Point3::new(4.5823, 8.2662, -0.3814),
            n7: Point3::new(3.8008, 8.6815, -3.2232),
            n9: Point3::new(3.8619, 7.0434, -4.7393),
            c8: Point3::new(3.5643, 8.3773, -4.5484),
            h2: Point3::new(5.3916, 4.0161, -1.5740),
            h61: Point3::new(4.8563, 8.0815, 0.5730),
            h62: Point3::new(4.2805, 9.1919, -0.6500),
            h8: Point3::new(3.2088, 9.0628, -5.3034),
        }),
    )
}

fn template_a01() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "A01",
        Transform::from_coefficients(
            0.8198351171292486, -0.4899172480065105, 0.29639748788982434,
            0.5725509542746702, 0.6946406325686019, -0.4354994791545188,
            0.007468967856118447, 0.5267404310383057, 0.8499933722263628,
            -2.5692774342215934, 5.600689433293779, -3.576756966553796,
        ),
        Transform::from_coefficients(
            -0.9641910563376968, -0.05776128394499025, -0.2588421158842253,
            0.16116662899166778, -0.902718473756966, -0.3989043429662761,
            -0.21062033277406672, -0.4263367110804796, 0.8797022702069267,
            8.438271441084241, -6.3755067156574246, 6.484378314372344,
        ),
        Transform::from_coefficients(
            0.6366107775249169, -0.5506103720464337, -0.5399582725859552,
            0.769654731592586, 0.4977152166102239, 0.39988893119437835,
            0.04856245541841359, -0.6701550427696008, 0.7406307491417088,
            -2.205432140092446, 3.00188674926566, 11.833149113348636,
        ),
        Transform::from_coefficients(
            0.687482231530332, 0.7045569171664212, 0.17597650923638547,
            -0.6951403005589667, 0.5683507956579824, 0.4401787541598618,
            0.21011459699141422, -0.4249434357039618, 0.8804969804509544,
            -8.245921345878129, -6.905421071165286, 6.182120502401346,
        ),
        CommonAtoms {
            p: Point3::new(9.1337, -4.3681, -5.0914),
            op1: Point3::new(9.3955, -2.9064, -5.1014),
            op2: Point3::new(8.0836, -4.7524, -6.0685),
            o5p: Point3::new(8.6080, -4.7567, -3.6365),
            c5p: Point3::new(7.5090, -4.0479, -3.0337),
            h5p: Point3::new(7.8286, -3.0399, -2.7690),
            h5pp: Point3::new(6.6889, -3.9743, -3.7480),
            c4p: Point3::new(7.0329, -4.7663, -1.7938),
            h4p: Point3::new(6.8670, -5.8053, -2.0783),
            o4p: Point3::new(5.8566, -4.0514, -1.3378),
            c1p: Point3::new(5.9104, -3.9771, 0.1093),
            h1p: Point3::new(5.0629, -4.4795, 0.5755),
            c2p: Point3::new(7.1199, -4.6460, 0.5477),
            h2pp: Point3::new(7.6271, -4.0492, 1.3058),
            o2p: Point3::new(6.8074, -5.9036, 1.1034),
            h2p: Point3::new(6.5922, -6.5139, 0.3943),
            c3p: Point3::new(7.9988, -4.8143, -0.6518),
            h3p: Point3::new(8.7698, -4.0543, -0.7787),
            o3p: Point3::new(8.7265, -6.0318, -0.5375),
            n1: Point3::new(6.7688, -5.2562, 3.9126),
            n3: Point3::new(6.5743, -4.9466, 1.5505),
            c2: Point3::new(7.0626, -5.6600, 2.6261),
            c4: Point3::new(5.7922, -3.8294, 1.7613),
            c5: Point3::new(5.4983, -3.4256, 3.0478),
            c6: Point3::new(5.9866, -4.1390, 4.1234),
        },
        BasePayload::Adenine(AdenineAtoms {
            n6: Point3::new(5.7013, -3.7469, 5.3726),
            n7: Point3::new(4.7099, -2.2956, 2.9704),
            n9: Point3::new(5.1853, -2.9490, 0.8889),
            c8: Point3::new(4.5165, -2.0011, 1.6362),
            h2: Point3::new(7.6748, -6.5344, 2.4611),
            h61: Point3::new(6.0587, -4.2690, 6.1598),
            h62: Point3::new(5.1289, -2.9292, 5.5269),
            h8: Point3::new(3.9424, -1.1740, 1.2454),
        }),
    )
}

fn template_a02() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "A02",
        Transform::from_coefficients(
            0.5965930761153593, -0.7722495685908499, -0.21842002047078793,
            0.2884093114550017, 0.46028209478002224, -0.8396192364941185,
            0.7489304177273514, 0.43791665535368807, 0.497325077154344,
            -1.6407622587895692, -0.7713727420113821, -6.448470853854703,
        ),
        Transform::from_coefficients(
            -0.06952169173749417, -0.7084326493906475, -0.702346008499589,
            0.35536196485288774, 0.6402772111543424, -0.6810014440603721,
            0.9321398008420474, -0.29693143005375033, 0.20723686335298278,
            -0.6997926136560133, 2.8477354222494835, 1.8134049077761947,
        ),
        Transform::from_coefficients(
            0.8690467158830182, 0.49446387567645644, -0.016225944162312544,
            -0.3671300106719911, 0.622572022454641, -0.6911003053976471,
            -0.3316223166147365, 0.6065554818050493, 0.7225766994688658,
            -2.570427882347958, -2.072356822581125, -0.9929661617388605,
        ),
        Transform::from_coefficients(
            -0.49560622093983586, 0.8484649092251373, 0.18569268046779322,
            -0.16562167976177697, 0.11755274470583987, -0.9791582157164442,
            -0.8526100708756739, -0.5160316366519625, 0.08226431192002406,
            2.50739360145016, -2.132109851213473, -1.0270486875382319,
        ),
        CommonAtoms {
            p: Point3::new(2.8297, -1.7874, 1.6432),
            op1: Point3::new(4.2365, -2.1951, 1.8879),
            op2: Point3::new(2.4704, -0.5529, 2.3863),
            o5p: Point3::new(1.8862, -2.9613, 2.1682),
            c5p: Point3::new(2.0301, -3.4852, 3.5018),
            h5p: Point3::new(3.0530, -3.8325, 3.6470),
            h5pp: Point3::new(1.8267, -2.6961, 4.2257),
            c4p: Point3::new(1.0733, -4.6317, 3.7256),
            h4p: Point3::new(1.2355, -5.3933, 2.9630),
            o4p: Point3::new(-0.2103, -3.9577, 3.7521),
            c1p: Point3::new(-1.0253, -4.5860, 4.7736),
            h1p: Point3::new(-1.9297, -5.0303, 4.3579),
            c2p: Point3::new(-0.2455, -5.6483, 5.3784),
            h2pp: Point3::new(-0.3948, -5.6597, 6.4581),
            o2p: Point3::new(-0.6372, -6.8995, 4.8594),
            h2p: Point3::new(-0.2847, -6.9937, 3.9715),
            c3p: Point3::new(1.2172, -5.3735, 5.0495),
            h3p: Point3::new(1.8695, -4.7223, 5.6313),
            o3p: Point3::new(1.9911, -6.5341, 5.3305),
            n1: Point3::new(-2.4449, -7.6620, 7.0890),
            n3: Point3::new(-1.2431, -6.2446, 5.5857),
            c2: Point3::new(-1.4124, -7.4720, 6.1933),
            c4: Point3::new(-2.1063, -5.2071, 5.8739),
            c5: Point3::new(-3.1388, -5.3971, 6.7696),
            c6: Point3::new(-3.3081, -6.6246, 7.3771),
        },
        BasePayload::Adenine(AdenineAtoms {
            n6: Point3::new(-4.3107, -6.8090, 8.2468),
            n7: Point3::new(-3.8389, -4.2122, 6.8710),
            n9: Point3::new(-2.1682, -3.9048, 5.4217),
            c8: Point3::new(-3.2390, -3.2899, 6.0379),
            h2: Point3::new(-0.7369, -8.2839, 5.9678),
            h61: Point3::new(-4.4346, -7.7074, 8.6915),
            h62: Point3::new(-4.9424, -6.0498, 8.4577),
            h8: Point3::new(-3.5525, -2.2665, 5.8936),
        }),
    )
}

fn template_a03() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "A03",
        Transform::from_coefficients(
            0.1037860244432024, -0.8406711814128833, -0.5315076912633928,
            -0.07270568852481543, 0.5265512390894229, -0.8470287335560264,
            0.991938679549501, 0.12655337749448053, -0.0064729172968603504,
            7.4635688761295995, -7.3274293745577905, 0.8947619360126993,
        ),
        Transform::from_coefficients(
            0.5730384060801338, -0.4978802348761167, -0.6509548808303403,
            -0.8149888632661316, -0.262715157024639, -0.516501596339932,
            0.08614022236631652, 0.8264962298699384, -0.5563127214988519,
            8.14141700828027, 2.714077990164733, 1.276962336732745,
        ),
        Transform::from_coefficients(
            0.36732625368309324, 0.9169114819109856, 0.1560280670102152,
            0.8267441347270588, -0.24502918752458253, -0.5064136974405906,
            -0.42610510328972945, 0.3150143355481515, -0.8480568432302197,
            -6.660311292490083, 4.9424221507307, 2.5479874057658636,
        ),
        Transform::from_coefficients(
            -0.902453325376396, 0.40964047347862403, -0.13331420781482095,
            0.3899269334860259, 0.9083080147028824, 0.151438228227528,
            0.18312559094585598, 0.08468313240969014, -0.9794354419899323,
            -4.953941101173001, -6.067249823588843, -3.7318186173923076,
        ),
        CommonAtoms {
            p: Point3::new(-2.9906, 7.5004, -3.6562),
            op1: Point3::new(-1.9072, 8.2025, -4.3900),
            op2: Point3::new(-2.4556, 6.5658, -2.6337),
            o5p: Point3::new(-3.8152, 6.6395, -4.7159),
            c5p: Point3::new(-3.1468, 5.7304, -5.6105),
            h5p: Point3::new(-2.6086, 6.2981, -6.3695),
            h5pp: Point3::new(-2.4273, 5.1332, -5.0503),
            c4p: Point3::new(-4.1457, 4.8170, -6.2797),
            h4p: Point3::new(-3.6625, 4.2211, -7.0540),
            o4p: Point3::new(-5.1620, 5.7792, -6.6589),
            c1p: Point3::new(-6.4590, 5.1588, -6.4703),
            h1p: Point3::new(-7.0162, 5.0861, -7.4043),
            c2p: Point3::new(-6.2443, 3.8132, -5.9746),
            h2pp: Point3::new(-6.9873, 3.5652, -5.2167),
            o2p: Point3::new(-6.3496, 2.8803, -7.0266),
            h2p: Point3::new(-5.5576, 2.9278, -7.5670),
            c3p: Point3::new(-4.8286, 3.7797, -5.3684),
            h3p: Point3::new(-4.4868, 4.1099, -4.3874),
            o3p: Point3::new(-4.5081, 2.4459, -4.9897),
            n1: Point3::new(-9.1923, 2.0989, -6.4087),
            n3: Point3::new(-7.2377, 3.4708, -6.5127),
            c2: Point3::new(-7.8244, 2.2220, -6.5429),
            c4: Point3::new(-8.0190, 4.5964, -6.3483),
            c5: Point3::new(-9.3869, 4.4732, -6.2142),
            c6: Point3::new(-9.9736, 3.2245, -6.2444),
        },
        BasePayload::Adenine(AdenineAtoms {
            n6: Point3::new(-11.3019, 3.1049, -6.1142),
            n7: Point3::new(-9.9165, 5.7389, -6.0660),
            n9: Point3::new(-7.7032, 5.9381, -6.2830),
            c8: Point3::new(-8.8759, 6.6443, -6.1085),
            h2: Point3::new(-7.2129, 1.3411, -6.6715),
            h61: Point3::new(-11.7312, 2.1910, -6.1363),
            h62: Point3::new(-11.8737, 3.9287, -5.9940),
            h8: Point3::new(-8.9639, 7.7171, -6.0206),
        }),
    )
}

fn template_c() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "C",
        Transform::from_coefficients(
            -0.30231010907206707, 0.34896515317050225, -0.8870354670617873,
            0.8428691456250381, 0.5324674486227928, -0.07778187134835267,
            0.44517434933535105, -0.7711690722726252, -0.4551022529762136,
            -5.1928151701265355, 2.0818657966911656, -0.15090812924155184,
        ),
        Transform::from_coefficients(
            0.8687595325544422, -0.1902332678000741, -0.45723973845007415,
            -0.36230525149135073, -0.8735878550342147, -0.32492947585362103,
            -0.3376266863528061, 0.4479459379867451, -0.8278602885170894,
            6.297484823519062, -2.7817974622052737, 9.761054818335744,
        ),
        Transform::from_coefficients(
            -0.09508313442280542, 0.9737736397180428, 0.20669807966841391,
            0.9777358405115724, 0.052336030517216525, 0.203208184108884,
            0.18706101605482606, 0.2214177917421638, -0.9570696619225578,
            -5.244387299679297, -1.1973975826174423, 10.664780554228223,
        ),
        Transform::from_coefficients(
            -0.9363653667715299, -0.003982764366057635, -0.3510043268947299,
            -0.2308011607897289, 0.7603889926233091, 0.6070744633695465,
            0.2644819919936545, 0.6494557086401761, -0.7129211446055971,
            -3.770633055379734, -9.743140656460687, 5.790374763332726,
        ),
        CommonAtoms {
            p: Point3::new(-2.0196, 3.2630, 9.9540),
            op1: Point3::new(-1.4775, 4.6447, 9.9091),
            op2: Point3::new(-0.9733, 2.2650, 10.2924),
            o5p: Point3::new(-2.5727, 2.9115, 8.4998),
            c5p: Point3::new(-1.7480, 3.0873, 7.3325),
            h5p: Point3::new(-1.5067, 4.1436, 7.2142),
            h5pp: Point3::new(-0.8184, 2.5321, 7.4580),
            c4p: Point3::new(-2.4656, 2.5941, 6.0989),
            h4p: Point3::new(-2.6822, 1.5415, 6.2811),
            o4p: Point3::new(-1.5991, 2.8495, 4.9647),
            c1p: Point3::new(-2.4302, 3.2566, 3.8485),
            h1p: Point3::new(-2.3482, 2.5692, 3.0066),
            c2p: Point3::new(-3.8104, 3.2529, 4.2928),
            h2pp: Point3::new(-4.3279, 4.1390, 3.9252),
            o2p: Point3::new(-4.4776, 2.1106, 3.8047),
            h2p: Point3::new(-4.1953, 1.3443, 4.3094),
            c3p: Point3::new(-3.7952, 3.2446, 5.8023),
            h3p: Point3::new(-3.7951, 4.1816, 6.3592),
            o3p: Point3::new(-5.0344, 2.7379, 6.2847),
            n1: Point3::new(-1.9137, 4.0447, 2.7071),
            n3: Point3::new(-3.9679, 3.9698, 1.4538),
            c2: Point3::new(-3.2362, 3.6339, 2.5868),
            c4: Point3::new(-3.3773, 4.7165, 0.4411),
            c5: Point3::new(-2.0548, 5.1273, 0.5614),
            c6: Point3::new(-1.3230, 4.7914, 1.6944),
        },
        BasePayload::Cytosine(CytosineAtoms {
            n4: Point3::new(-4.0827, 5.0404, -0.6512),
            o2: Point3::new(-3.7589, 2.9731, 3.4830),
            h41: Point3::new(-5.0436, 4.7419, -0.7386),
            h42: Point3::new(-3.6535, 5.5829, -1.3871),
            h5: Point3::new(-1.5958, 5.7075, -0.2255),
            h6: Point3::new(-0.2955, 5.1105, 1.7879),
        }),
    )
}

fn template_c01() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "C01",
        Transform::from_coefficients(
            -0.22559535378831036, -0.6760978957682927, 0.7014259559545926,
            -0.9707492578000553, 0.09527263971949751, -0.22038376210946392,
            0.0821742954321425, -0.7306262789268982, -0.6778145953811155,
            -4.769030641631531, 5.039799584046912, -4.030750839709659,
        ),
        Transform::from_coefficients(
            -0.5731246745684855, 0.6991689408895175, 0.4274235598281848,
            0.8185059479212545, 0.5136839249061464, 0.25724859282519935,
            -0.03970038561898566, 0.49728424204718846, -0.8666788690127715,
            10.005718379290766, -4.243646053587719, 7.234178613719336,
        ),
        Transform::from_coefficients(
            -0.4227911760793203, -0.7992003156372746, -0.42723117502675956,
            -0.9060554537587712, 0.3819644750292125, 0.18211714507328983,
            0.017639051659677277, 0.4640926580985079, -0.8856110142470046,
            -4.914586783316518, 3.4160322810607457, 11.603182000339533,
        ),
        Transform::from_coefficients(
            0.9392874789726149, -0.30959025051534017, -0.14796252441452196,
            -0.341444057045154, -0.80059639385367, -0.4924036657632082,
            0.03398511076655153, 0.5130295224783349, -0.8576979196149638,
            -8.254668275891989, -9.067696626633914, 4.482588746619097,
        ),
        CommonAtoms {
            p: Point3::new(5.6491, -7.9203, 7.1855),
            op1: Point3::new(4.4455, -8.7855, 7.0962),
            op2: Point3::new(5.3769, -6.6622, 7.9259),
            o5p: Point3::new(6.0744, -7.5262, 5.6996),
            c5p: Point3::new(5.1191, -6.9605, 4.7825),
            h5p: Point3::new(4.3989, -7.7251, 4.4911),
            h5pp: Point3::new(4.5821, -6.1485, 5.2727),
            c4p: Point3::new(5.8165, -6.4316, 3.5520),
            h4p: Point3::new(6.6152, -5.8014, 3.9433),
            o4p: Point3::new(4.8621, -5.7110, 2.7320),
            c1p: Point3::new(5.1588, -5.9980, 1.3420),
            h1p: Point3::new(5.4241, -5.0982, 0.7871),
            c2p: Point3::new(6.2966, -6.8961, 1.3030),
            h2pp: Point3::new(6.1172, -7.7009, 0.5901),
            o2p: Point3::new(7.4557, -6.1976, 0.9069),
            h2p: Point3::new(7.7623, -5.6596, 1.6405),
            c3p: Point3::new(6.4741, -7.4545, 2.6800),
            h3p: Point3::new(6.0297, -8.4353, 2.8492),
            o3p: Point3::new(7.8601, -7.6524, 2.9347),
            n1: Point3::new(4.1582, -5.8570, 0.2607),
            n3: Point3::new(5.6986, -6.3655, -1.5183),
            c2: Point3::new(5.4390, -6.1906, -0.1640),
            c4: Point3::new(4.6774, -6.2069, -2.4478),
            c5: Point3::new(3.3966, -5.8733, -2.0231),
            c6: Point3::new(3.1370, -5.6984, -0.6688),
        },
        BasePayload::Cytosine(CytosineAtoms {
            n4: Point3::new(4.9276, -6.3755, -3.7534),
            o2: Point3::new(6.3426, -6.3310, 0.6586),
            h41: Point3::new(5.8583, -6.6179, -4.0620),
            h42: Point3::new(4.1856, -6.2603, -4.4289),
            h5: Point3::new(2.6031, -5.7500, -2.7454),
            h6: Point3::new(2.1418, -5.4392, -0.3388),
        }),
    )
}

fn template_c02() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "C02",
        Transform::from_coefficients(
            -0.1470639918962738, -0.7599970698672012, 0.6330692190280627,
            -0.7317651699889123, -0.34702568908587716, -0.5865943292477097,
            0.6655012534012471, -0.5495249083597036, -0.5051044018949236,
            3.262538790061161, 0.253213834556834, -7.136591250543586,
        ),
        Transform::from_coefficients(
            -0.461492677954549, -0.8376732387827885, 0.2921096595826509,
            -0.8785234140903613, 0.38573250087285826, -0.28179256318324997,
            0.12337389954668126, -0.3866703800364384, -0.9139282784295065,
            3.6660132696945555, 2.0069917258384975, -0.4036526524472397,
        ),
        Transform::from_coefficients(
            0.7355535090279092, -0.42534490458527924, 0.5272975891278752,
            0.2700032441136408, -0.5297945630618028, -0.8039999807949394,
            0.6213366909533348, 0.733757066809917, -0.2748477458187843,
            -3.1695809286079313, 2.7538810913867833, 0.022365520241578674,
        ),
        Transform::from_coefficients(
            0.043694328558249715, 0.31333915253082223, 0.9486355365171125,
            0.8317456572944201, 0.5146027508098959, -0.20828627038468306,
            -0.5534347000538697, 0.7981244165856312, -0.2381332577069583,
            -2.1177970537952486, -2.2582621975140182, -2.836510537827028,
        ),
        CommonAtoms {
            p: Point3::new(4.5563, 1.6384, -1.0046),
            op1: Point3::new(5.4848, 1.3240, 0.1108),
            op2: Point3::new(3.2053, 1.0628, -0.7837),
            o5p: Point3::new(5.1519, 0.9824, -2.3309),
            c5p: Point3::new(5.5223, -0.4087, -2.3659),
            h5p: Point3::new(6.2471, -0.6113, -1.5774),
            h5pp: Point3::new(4.6397, -1.0238, -2.1907),
            c4p: Point3::new(6.1240, -0.7622, -3.7049),
            h4p: Point3::new(6.9690, -0.0927, -3.8657),
            o4p: Point3::new(5.0348, -0.6544, -4.6560),
            c1p: Point3::new(5.1902, -1.7110, -5.6368),
            h1p: Point3::new(5.3275, -1.3163, -6.6435),
            c2p: Point3::new(6.3754, -2.4718, -5.2919),
            h2pp: Point3::new(6.1937, -3.5378, -5.4281),
            o2p: Point3::new(7.4563, -2.0935, -6.1145),
            h2p: Point3::new(7.7843, -1.2386, -5.8262),
            c3p: Point3::new(6.6915, -2.1712, -3.8314),
            h3p: Point3::new(6.2508, -2.6954, -2.9834),
            o3p: Point3::new(8.0069, -2.6226, -3.5299),
            n1: Point3::new(4.0654, -2.2246, -6.4501),
            n3: Point3::new(5.4242, -3.7043, -7.7768),
            c2: Point3::new(5.3093, -2.7597, -6.7636),
            c4: Point3::new(4.2951, -4.1138, -8.4766),
            c5: Point3::new(3.0512, -3.5786, -8.1631),
            c6: Point3::new(2.9363, -2.6340, -7.1498),
        },
        BasePayload::Cytosine(CytosineAtoms {
            n4: Point3::new(4.4059, -5.0244, -9.4534),
            o2: Point3::new(6.3084, -2.3974, -6.1444),
            h41: Point3::new(5.3098, -5.4132, -9.6812),
            h42: Point3::new(3.5855, -5.3219, -9.9618),
            h5: Point3::new(2.1739, -3.8968, -8.7068),
            h6: Point3::new(1.9697, -2.2182, -6.9063),
        }),
    )
}

fn template_c03() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "C03",
        Transform::from_coefficients(
            -0.0789385324161147, -0.3177113701159084, 0.9448958637855615,
            0.4060643984667816, -0.8759022736734408, -0.2605895455913526,
            0.9104286970421136, 0.36311801424987045, 0.19815371641589286,
            -8.419355294018098, 2.6428429298910863, 2.706276739547179,
        ),
        Transform::from_coefficients(
            0.6718490466885771, 0.2677420909130528, 0.6906033819908187,
            0.7335397746158193, -0.1112907554793674, -0.6704727934833781,
            -0.10265601550919068, 0.9570415563069025, -0.2711700609975931,
            -2.7368656430466682, -5.392932071893157, 14.170745060322826,
        ),
        Transform::from_coefficients(
            -0.8336593306489117, 0.024296266932713584, 0.5517443355714156,
            0.00463568556590184, 0.999304496859832, -0.03700044560612692,
            -0.5522595683565318, -0.02828805346523877, -0.8331921478205401,
            -0.6550768658380491, -10.49615677899398, 11.259917078532567,
        ),
        Transform::from_coefficients(
            -0.2206922676743162, -0.9751710125515689, -0.018341735684383742,
            -0.8468658668830211, 0.2009166446867147, -0.4923928364591644,
            0.48385238089445926, -0.09313430177426707, -0.8701797948331037,
            3.582097804151837, -7.72150204440404, 12.842552197463,
        ),
        CommonAtoms {
            p: Point3::new(-5.7594, 10.0686, 7.5924),
            op1: Point3::new(-6.5810, 10.6480, 6.4995),
            op2: Point3::new(-5.0619, 11.1164, 8.3802),
            o5p: Point3::new(-4.6459, 9.1430, 6.9234),
            c5p: Point3::new(-3.7982, 9.6469, 5.8741),
            h5p: Point3::new(-4.3782, 9.7503, 4.9570),
            h5pp: Point3::new(-3.4174, 10.6289, 6.1550),
            c4p: Point3::new(-2.6400, 8.7085, 5.6334),
            h4p: Point3::new(-2.0928, 9.0535, 4.7561),
            o4p: Point3::new(-3.2709, 7.4054, 5.5541),
            c1p: Point3::new(-2.3821, 6.4389, 6.1693),
            h1p: Point3::new(-2.0601, 5.6734, 5.4633),
            c2p: Point3::new(-1.2018, 7.1448, 6.6289),
            h2pp: Point3::new(-0.8769, 6.7529, 7.5927),
            o2p: Point3::new(-0.1477, 6.9912, 5.7051),
            h2p: Point3::new(-0.3188, 7.5460, 4.9406),
            c3p: Point3::new(-1.5896, 8.6300, 6.7575),
            h3p: Point3::new(-2.1127, 9.1422, 7.5650),
            o3p: Point3::new(-0.4319, 9.3953, 7.0722),
            n1: Point3::new(-2.8523, 5.1426, 6.7067),
            n3: Point3::new(-0.6527, 4.3338, 7.2581),
            c2: Point3::new(-1.4753, 5.3289, 6.7430),
            c4: Point3::new(-1.2071, 3.1525, 7.7370),
            c5: Point3::new(-2.5841, 2.9663, 7.7007),
            c6: Point3::new(-3.4067, 3.9613, 7.1856),
        },
        BasePayload::Cytosine(CytosineAtoms {
            n4: Point3::new(-0.4141, 2.1933, 8.2335),
            o2: Point3::new(-0.9847, 6.3742, 6.3193),
            h41: Point3::new(0.5864, 2.3286, 8.2599),
            h42: Point3::new(-0.8169, 1.3349, 8.5815),
            h5: Point3::new(-3.0148, 2.0484, 8.0727),
            h6: Point3::new(-4.4766, 3.8166, 7.1574),
        }),
    )
}

fn template_g() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "G",
        Transform::from_coefficients(
            -0.5013694517104345, -0.3785156113916438, 0.7780453745279823,
            0.8043095976083137, 0.12756827459968298, 0.5803554139583884,
            -0.3189274903277088, 0.9167618378011106, 0.24048490319518862,
            -4.106956722439218, -0.08455579296483434, 5.6211267560772376,
        ),
        Transform::from_coefficients(
            -0.188256358563621, 0.5362530632698428, 0.8227953546259699,
            -0.889850019107207, -0.44765501536842445, 0.08815855438015767,
            0.4156037619599574, -0.7155680536113987, 0.5614587016829691,
            1.5835609867970668, -1.9624533438898104, 13.22657872553446,
        ),
        Transform::from_coefficients(
            -0.6623167795917373, -0.7434460597137991, 0.09286786186435292,
            0.7438495553632806, -0.6673147448227323, -0.03713314325533992,
            0.08957858258021399, 0.04448581389834233, 0.994985773719766,
            -4.990768977423941, -7.088645180707106, 10.30265052424042,
        ),
        Transform::from_coefficients(
            0.6552109002544984, -0.750182042189501, 0.08902572529375688,
            0.5309420393160985, 0.5411175173086995, 0.6521444497567482,
            -0.5374004345686298, -0.38002465188203144, 0.752849278997721,
            1.4838507276512491, -10.413010646694255, 8.406465939887681,
        ),
        CommonAtoms {
            p: Point3::new(-8.8170, -0.1601, -8.1469),
            op1: Point3::new(-10.0704, 0.3903, -7.5714),
            op2: Point3::new(-8.9500, -1.5963, -8.5000),
            o5p: Point3::new(-7.6786, -0.0372, -7.0365),
            c5p: Point3::new(-7.8847, -0.5488, -5.7063),
            h5p: Point3::new(-8.7001, -0.0042, -5.2302),
            h5pp: Point3::new(-8.1581, -1.6026, -5.7611),
            c4p: Point3::new(-6.6294, -0.3972, -4.8810),
            h4p: Point3::new(-5.8191, -0.9507, -5.3556),
            o4p: Point3::new(-7.0618, -0.8314, -3.5669),
            c1p: Point3::new(-6.4646, 0.0518, -2.5841),
            h1p: Point3::new(-5.8087, -0.4847, -1.8984),
            c2p: Point3::new(-5.6631, 1.0318, -3.2909),
            h2pp: Point3::new(-5.8178, 2.0236, -2.8659),
            o2p: Point3::new(-4.2943, 0.7095, -3.1877),
            h2p: Point3::new(-4.1030, -0.0311, -3.7677),
            c3p: Point3::new(-6.0983, 1.0084, -4.7362),
            h3p: Point3::new(-6.8988, 1.6624, -5.0820),
            o3p: Point3::new(-5.0580, 1.5353, -5.5517),
            n1: Point3::new(-3.5808, 2.4873, -0.9748),
            n3: Point3::new(-4.9391, 1.0913, -2.3602),
            c2: Point3::new(-3.8098, 1.8648, -2.1850),
            c4: Point3::new(-5.8396, 0.9405, -1.3254),
            c5: Point3::new(-5.6106, 1.5631, -0.1153),
            c6: Point3::new(-4.4812, 2.3365, 0.0600),
        },
        BasePayload::Guanine(GuanineAtoms {
            n2: Point3::new(-2.9355, 2.0112, -3.1898),
            n7: Point3::new(-6.6544, 1.2479, 0.7307),
            n9: Point3::new(-7.0248, 0.2406, -1.2273),
            c8: Point3::new(-7.5284, 0.4306, 0.0434),
            o6: Point3::new(-4.2771, 2.8914, 1.1386),
            h1: Point3::new(-2.7542, 3.0534, -0.8466),
            h21: Point3::new(-3.1030, 1.5556, -4.0755),
            h22: Point3::new(-2.1089, 2.5773, -3.0615),
            h8: Point3::new(-8.4456, 0.0130, 0.4318),
        }),
    )
}

fn template_g01() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "G01",
        Transform::from_coefficients(
            -0.001170741773415196, -0.920806552342583, 0.39001784898471725,
            0.41655766057225163, 0.3541199839174842, 0.8373044562217816,
            -0.9091085440046599, 0.1634451900584611, 0.38315444022545364,
            0.20844673761753318, 1.7392510983505802, 6.866757128693493,
        ),
        Transform::from_coefficients(
            -0.6292372738634956, 0.7740352115990858, 0.07021356268980013,
            -0.5738327299291414, -0.52360918546533, 0.6297216996089641,
            0.524191235373986, 0.35595352519829304, 0.7736411549652739,
            -0.8837503253521055, -4.8074186522906395, 12.834555544505527,
        ),
        Transform::from_coefficients(
            -0.29778195772678673, -0.6206781227860091, -0.725316878024521,
            0.41060416125997584, -0.7691888385270443, 0.48964553856990073,
            -0.8618179206818541, -0.1520105212814305, 0.4839035782171418,
            -1.4487591472283128, -8.316711613135354, 10.83289017936632,
        ),
        Transform::from_coefficients(
            0.9210394368357658, -0.029864339173461374, -0.3883226455397466,
            0.3881367106688054, -0.012026457828659257, 0.9215233356477174,
            -0.03219083137254023, -0.9994816084139959, 0.0005146044274471004,
            1.9761100423525113, -7.816811992058664, 11.118027889075961,
        ),
        CommonAtoms {
            p: Point3::new(1.7501, -9.8219, -6.9653),
            op1: Point3::new(0.6832, -9.5324, -7.9568),
            op2: Point3::new(1.6300, -11.1906, -6.4017),
            o5p: Point3::new(1.5886, -8.7865, -5.7628),
            c5p: Point3::new(0.3222, -8.6158, -5.0990),
            h5p: Point3::new(-0.3747, -8.1138, -5.7701),
            h5pp: Point3::new(-0.0877, -9.5927, -4.8423),
            c4p: Point3::new(0.4901, -7.7951, -3.8427),
            h4p: Point3::new(1.2935, -8.2422, -3.2572),
            o4p: Point3::new(-0.8245, -7.7879, -3.2309),
            c1p: Point3::new(-1.0764, -6.4523, -2.7258),
            h1p: Point3::new(-1.2205, -6.4450, -1.6454),
            c2p: Point3::new(0.0825, -5.6339, -3.0255),
            h2pp: Point3::new(-0.2305, -4.6681, -3.4220),
            o2p: Point3::new(0.8393, -5.4137, -1.8564),
            h2p: Point3::new(1.3208, -6.2155, -1.6401),
            c3p: Point3::new(0.9001, -6.3695, -4.0403),
            h3p: Point3::new(0.7400, -6.0720, -5.0766),
            o3p: Point3::new(2.2806, -6.1095, -3.8135),
            n1: Point3::new(-0.1384, -2.8201, -1.0629),
            n3: Point3::new(-0.1366, -4.9931, -2.0585),
            c2: Point3::new(0.5525, -3.9058, -1.5613),
            c4: Point3::new(-1.5166, -4.9948, -2.0574),
            c5: Point3::new(-2.2075, -3.9091, -1.5590),
            c6: Point3::new(-1.5184, -2.8218, -1.0618),
        },
        BasePayload::Guanine(GuanineAtoms {
            n2: Point3::new(1.8925, -3.9042, -1.5624),
            n7: Point3::new(-3.5571, -4.1716, -1.6775),
            n9: Point3::new(-2.4392, -5.9282, -2.4839),
            c8: Point3::new(-3.7003, -5.4194, -2.2490),
            o6: Point3::new(-2.1342, -1.8541, -0.6176),
            h1: Point3::new(0.3659, -2.0243, -0.6990),
            h21: Point3::new(2.3982, -4.6987, -1.9271),
            h22: Point3::new(2.3968, -3.1084, -1.1984),
            h8: Point3::new(-4.6352, -5.9115, -2.4732),
        }),
    )
}

fn template_g02() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "G02",
        Transform::from_coefficients(
            0.8385352037020665, -0.3102675924107367, -0.44787580114578507,
            0.5394324001387841, 0.35715907959127924, 0.7625287388328528,
            -0.07662504703322928, -0.8810059097220377, 0.4668588536185216,
            -5.330521965046559, 6.728410347311588, -1.4931326928128352,
        ),
        Transform::from_coefficients(
            0.33671790115312544, -0.3935608134165716, -0.8554127314845861,
            0.7751634634899487, -0.3998734011632169, 0.4891041483287867,
            -0.534549024798756, -0.8277748179215454, 0.1704294308552707,
            2.3381152649678425, 7.345891445504348, 9.783191400458968,
        ),
        Transform::from_coefficients(
            0.4947402278110751, 0.8573795122333117, -0.1418889671116602,
            -0.29663889029830504, 0.3200734783814536, 0.8997545983207793,
            0.8168460538853305, -0.4030550091977092, 0.41268533268411495,
            -10.89282533008763, -5.524788895347843, 2.4418849459928262,
        ),
        Transform::from_coefficients(
            -0.7149997239836526, 0.6485856338247384, -0.26098289273334097,
            -0.6952089999574087, -0.6201437263087403, 0.3634641730599178,
            0.07389073745416305, 0.4413144392789258, 0.8943051630189818,
            4.524867154027634, -11.561262728382447, -1.0012589391064668,
        ),
        CommonAtoms {
            p: Point3::new(9.5994, -2.6676, 6.5524),
            op1: Point3::new(10.6822, -2.4697, 7.5491),
            op2: Point3::new(10.0360, -2.3133, 5.1779),
            o5p: Point3::new(8.3961, -1.6968, 6.9444),
            c5p: Point3::new(8.6214, -0.2918, 7.1653),
            h5p: Point3::new(9.3776, -0.1628, 7.9396),
            h5pp: Point3::new(8.9861, 0.1663, 6.2459),
            c4p: Point3::new(7.3427, 0.3880, 7.5929),
            h4p: Point3::new(6.9265, -0.1012, 8.4736),
            o4p: Point3::new(6.5948, 0.3516, 6.3512),
            c1p: Point3::new(5.8887, 1.6109, 6.2164),
            h1p: Point3::new(4.8081, 1.4717, 6.1866),
            c2p: Point3::new(6.2002, 2.4255, 7.3748),
            h2pp: Point3::new(6.3606, 3.4616, 7.0767),
            o2p: Point3::new(5.1379, 2.3858, 8.3011),
            h2p: Point3::new(5.1492, 1.5391, 8.7535),
            c3p: Point3::new(7.4675, 1.8521, 7.9982),
            h3p: Point3::new(8.4801, 2.1117, 7.6892),
            o3p: Point3::new(7.6401, 2.3946, 9.3023),
            n1: Point3::new(3.8619, 4.9428, 7.4926),
            n3: Point3::new(5.1371, 2.9315, 7.2883),
            c2: Point3::new(4.5758, 3.9159, 8.0759),
            c4: Point3::new(4.9845, 2.9740, 5.9175),
            c5: Point3::new(4.2706, 4.0009, 5.3341),
            c6: Point3::new(3.7093, 4.9853, 6.1217),
        },
        BasePayload::Guanine(GuanineAtoms {
            n2: Point3::new(4.7240, 3.8747, 9.4071),
            n7: Point3::new(4.2744, 3.8010, 3.9687),
            n9: Point3::new(5.4295, 2.1395, 4.9125),
            c8: Point3::new(4.9907, 2.6506, 3.7081),
            o6: Point3::new(3.0730, 5.9006, 5.6018),
            h1: Point3::new(3.4511, 5.6633, 8.0690),
            h21: Point3::new(5.2465, 3.1231, 9.8340),
            h22: Point3::new(4.3132, 4.5952, 9.9835),
            h8: Point3::new(5.1753, 2.2250, 2.7329),
        }),
    )
}

fn template_g03() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "G03",
        Transform::from_coefficients(
            0.8619915875970535, 0.12182764064643117, -0.49206557376678506,
            0.15535409411320728, 0.8604963969119801, 0.4851917727494611,
            0.48253042220587095, -0.4946756279381712, 0.7228142325451263,
            -1.899600145016231, -8.459299774202968, 3.168041426374334,
        ),
        Transform::from_coefficients(
            -0.09108369297724477, 0.47905292563959, -0.873047567610022,
            -0.5624303442076619, 0.6987373055580385, 0.4420840256511686,
            0.8218125508825465, 0.5312950896231224, 0.20579032764996658,
            7.99292333964191, -4.028922919392052, 8.519776154998201,
        ),
        Transform::from_coefficients(
            0.05977801983874813, 0.43195310475101945, -0.8999128311342784,
            -0.4341041502245878, -0.8005627091515352, -0.4131016042981953,
            -0.8988771746473191, 0.41535029073290536, 0.13965658196499123,
            -4.621340162632695, 1.0436708895803473, 11.41313258095916,
        ),
        Transform::from_coefficients(
            0.06518264728567622, 0.5504089388503967, -0.8323468162529434,
            0.9344784054834075, -0.3262354577651426, -0.14255011673778348,
            -0.35000190310628176, -0.7685183316813907, -0.5356101583163198,
            -6.133556831409503, -9.15137946825457, 5.597978524338003,
        ),
        CommonAtoms {
            p: Point3::new(8.5101, 3.6044, -6.3160),
            op1: Point3::new(8.4499, 2.3915, -7.1706),
            op2: Point3::new(9.1788, 3.3378, -5.0172),
            o5p: Point3::new(7.0115, 4.0543, -6.0065),
            c5p: Point3::new(6.0523, 3.1185, -5.4794),
            h5p: Point3::new(5.7651, 2.4145, -6.2604),
            h5pp: Point3::new(6.5030, 2.5601, -4.6590),
            c4p: Point3::new(4.8255, 3.8435, -4.9800),
            h4p: Point3::new(4.0309, 3.1493, -4.7065),
            o4p: Point3::new(4.6440, 4.7555, -6.0926),
            c1p: Point3::new(4.2269, 6.0372, -5.5579),
            h1p: Point3::new(3.2419, 6.3300, -5.9216),
            c2p: Point3::new(4.1505, 5.9173, -4.1149),
            h2pp: Point3::new(4.5242, 6.8237, -3.6387),
            o2p: Point3::new(2.8151, 5.7168, -3.7093),
            h2p: Point3::new(2.5597, 4.8134, -3.9100),
            c3p: Point3::new(5.0181, 4.7074, -3.7193),
            h3p: Point3::new(6.0982, 4.6427, -3.5876),
            o3p: Point3::new(4.8708, 4.4554, -2.3265),
            n1: Point3::new(2.3213, 8.5969, -2.9782),
            n3: Point3::new(3.2903, 6.7257, -4.1065),
            c2: Point3::new(2.5957, 7.2456, -3.0333),
            c4: Point3::new(3.7104, 7.5572, -5.1246),
            c5: Point3::new(3.4360, 8.9085, -5.0695),
            c6: Point3::new(2.7414, 9.4283, -3.9963),
        },
        BasePayload::Guanine(GuanineAtoms {
            n2: Point3::new(2.1878, 6.4382, -2.0447),
            n7: Point3::new(3.9632, 9.4972, -6.2008),
            n9: Point3::new(4.4072, 7.3107, -6.2900),
            c8: Point3::new(4.5634, 8.5097, -6.9551),
            o6: Point3::new(2.4969, 10.6328, -3.9472),
            h1: Point3::new(1.8130, 8.9773, -2.1927),
            h21: Point3::new(2.3886, 5.4492, -2.0850),
            h22: Point3::new(1.6795, 6.8187, -1.2592),
            h8: Point3::new(5.0671, 8.6505, -7.9001),
        }),
    )
}

fn template_u() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "U",
        Transform::from_coefficients(
            0.9725692754806198, 0.13703075907653933, -0.18796695310083028,
            -0.101993161583765, 0.9774590536495164, 0.1848545196329803,
            0.2090607552393569, -0.1606124824087447, 0.9646228439723219,
            2.9561094069714393, 3.7833541820065735, -1.244064004586718,
        ),
        Transform::from_coefficients(
            -0.5220678053242969, -0.6182143999112092, -0.5875850256654738,
            0.3331801420720413, -0.7820068263263108, 0.5267412234749669,
            -0.785134510496594, 0.07922297218278446, 0.6142373491621941,
            1.8086403056782827, -8.195910202034534, 5.486219568000481,
        ),
        Transform::from_coefficients(
            0.9782108479606867, 0.06805915545030448, -0.19614150068617767,
            0.19566598995845033, 0.013649538769361536, 0.980575601605997,
            0.06941438831837526, -0.9975879116402597, 3.5264866929396455e-05,
            2.9070843653233522, -1.1010368101935764, 9.533063903013577,
        ),
        Transform::from_coefficients(
            -0.04733984971527682, 0.9504736229265864, 0.3071788253603169,
            -0.5128506511890272, -0.2870240609657075, 0.8090744081984945,
            0.857171597875201, -0.11923539972492556, 0.5010386923666789,
            -4.005878994479545, -2.1426336365854564, 8.938947562459985,
        ),
        CommonAtoms {
            p: Point3::new(-1.2241, -8.5556, -0.5131),
            op1: Point3::new(-0.0064, -7.8676, -1.0122),
            op2: Point3::new(-2.0821, -9.0438, -1.6225),
            o5p: Point3::new(-2.0713, -7.4952, 0.3247),
            c5p: Point3::new(-2.4153, -6.2144, -0.2365),
            h5p: Point3::new(-1.5052, -5.6471, -0.4312),
            h5pp: Point3::new(-2.9402, -6.3609, -1.1805),
            c4p: Point3::new(-3.2968, -5.4402, 0.7141),
            h4p: Point3::new(-4.1702, -6.0755, 0.8610),
            o4p: Point3::new(-3.6021, -4.1508, 0.1252),
            c1p: Point3::new(-3.6273, -3.1666, 1.1897),
            h1p: Point3::new(-4.6051, -2.6946, 1.2860),
            c2p: Point3::new(-3.3377, -3.8478, 2.4366),
            h2pp: Point3::new(-2.6442, -3.2585, 3.0365),
            o2p: Point3::new(-4.5225, -4.0352, 3.1775),
            h2p: Point3::new(-5.0320, -4.7442, 2.7782),
            c3p: Point3::new(-2.7233, -5.1815, 2.0864),
            h3p: Point3::new(-1.6433, -5.2798, 1.9772),
            o3p: Point3::new(-2.8854, -6.0782, 3.1793),
            n1: Point3::new(-3.4245, -1.7200, 0.9520),
            n3: Point3::new(-3.8465, -1.0716, 3.2319),
            c2: Point3::new(-3.7418, -2.0613, 2.2616),
            c4: Point3::new(-3.6339, 0.2595, 2.8927),
            c5: Point3::new(-3.3166, 0.6009, 1.5831),
            c6: Point3::new(-3.2119, -0.3889, 0.6128),
        },
        BasePayload::Uracil(UracilAtoms {
            o2: Point3::new(-3.9299, -3.2392, 2.5618),
            o4: Point3::new(-3.7266, 1.1354, 3.7513),
            h3: Point3::new(-4.0770, -1.3196, 4.1835),
            h5: Point3::new(-3.1515, 1.6351, 1.3195),
            h6: Point3::new(-2.9654, -0.1237, -0.4047),
        }),
    )
}

fn template_u01() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "U01",
        Transform::from_coefficients(
            0.9845314588787223, -0.15824366767841208, -0.07521135630886536,
            0.15940908560534542, 0.9871648098982085, 0.009715015445251001,
            0.07270866457721856, -0.02155411186567634, 0.9971202888102716,
            6.615569320364149, 4.263840794420319, -4.374202348690988,
        ),
        Transform::from_coefficients(
            -0.6794332454052396, -0.5114714083973793, -0.5260869352398942,
            0.388127079228136, -0.8590015086966489, 0.3338768911241341,
            -0.6226779548112649, 0.022658474107540738, 0.7821500867117371,
            2.398645725955962, -10.716424938260857, 2.170175093922177,
        ),
        Transform::from_coefficients(
            0.9502078219802673, -0.10408728982433393, -0.2937191364969975,
            0.30886649480184114, 0.1896350228375523, 0.9320086085987751,
            -0.041310815004560505, -0.9763218701895527, 0.21234175838311398,
            5.93100408113286, 1.8156491124311431, 9.318343930356912,
        ),
        Transform::from_coefficients(
            0.15222530410718843, 0.9409586313809699, 0.3023645330046596,
            -0.6510301885438915, -0.13471732477260473, 0.7470012958560496,
            0.7436310579810252, -0.31056093836115994, 0.5920850894679384,
            -6.687335399550221, 1.0986886540702505, 8.90939690493391,
        ),
        CommonAtoms {
            p: Point3::new(-3.0340, -9.7210, 1.1034),
            op1: Point3::new(-1.9966, -8.8041, 0.5664),
            op2: Point3::new(-4.0128, -10.1252, 0.0623),
            o5p: Point3::new(-3.8318, -8.9376, 2.2409),
            c5p: Point3::new(-4.3968, -7.6378, 1.9864),
            h5p: Point3::new(-3.5948, -6.9057, 1.8911),
            h5pp: Point3::new(-4.9560, -7.6619, 1.0511),
            c4p: Point3::new(-5.3173, -7.2316, 3.1123),
            h4p: Point3::new(-5.9704, -8.0970, 3.2242),
            o4p: Point3::new(-6.0476, -6.0260, 2.7723),
            c1p: Point3::new(-6.1675, -5.2212, 3.9725),
            h1p: Point3::new(-7.2081, -5.0658, 4.2574),
            c2p: Point3::new(-5.5112, -5.9294, 5.0543),
            h2pp: Point3::new(-4.8895, -5.2444, 5.6308),
            o2p: Point3::new(-6.4703, -6.4975, 5.9177),
            h2p: Point3::new(-6.8536, -7.2692, 5.4945),
            c3p: Point3::new(-4.6674, -7.0021, 4.4406),
            h3p: Point3::new(-3.6150, -6.7519, 4.3066),
            o3p: Point3::new(-4.6482, -8.1372, 5.2987),
            n1: Point3::new(-6.4017, -3.7602, 3.9406),
            n3: Point3::new(-6.6153, -3.5297, 6.3275),
            c2: Point3::new(-6.4035, -4.3278, 5.2094),
            c4: Point3::new(-6.8253, -2.1639, 6.1769),
            c5: Point3::new(-6.8235, -1.5963, 4.9080),
            c6: Point3::new(-6.6117, -2.3944, 3.7899),
        },
        BasePayload::Uracil(UracilAtoms {
            o2: Point3::new(-6.2176, -5.5363, 5.3427),
            o4: Point3::new(-7.0127, -1.4576, 7.1663),
            h3: Point3::new(-6.6166, -3.9421, 7.2495),
            h5: Point3::new(-6.9867, -0.5351, 4.7910),
            h6: Point3::new(-6.6103, -1.9534, 2.8041),
        }),
    )
}

fn template_u02() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "U02",
        Transform::from_coefficients(
            0.8389718563006172, -0.3170999011112725, -0.4422373537487734,
            0.43350979225477954, 0.8806904136126837, 0.19092840383226864,
            0.3289308200134405, -0.3518977807346065, 0.8763403833895506,
            -0.09841342554936428, -6.1513084595043015, 4.965010737521366,
        ),
        Transform::from_coefficients(
            0.4314143454896338, -0.3027237709717341, -0.8498470338798646,
            0.8798796845846859, 0.34922582101353267, 0.3222624188337479,
            0.1992320334707866, -0.8867917706125137, 0.41702152511952906,
            -0.7987283400536831, -8.070796999375647, 8.321813594904821,
        ),
        Transform::from_coefficients(
            0.3766710800384222, 0.9130519971024693, -0.15638077902952352,
            -0.8409236881637366, 0.4078356597429296, 0.35569288062477167,
            0.38854375319619716, -0.002474920047485063, 0.9214269513222255,
            2.8999553117521732, -4.909471779649517, 10.125001664658821,
        ),
        Transform::from_coefficients(
            -0.7457314030284293, 0.5632031254632269, -0.3559310523201127,
            -0.45518002441864436, -0.8207993170563957, -0.345108137385946,
            -0.48651394626207006, -0.09534527040292656, 0.868454638714251,
            -1.0018841155506861, -3.1102047630755973, 11.151285451705899,
        ),
        CommonAtoms {
            p: Point3::new(4.0366, 1.0098, -9.1914),
            op1: Point3::new(4.9936, 0.3198, -8.2897),
            op2: Point3::new(4.6550, 2.1751, -9.8731),
            o5p: Point3::new(2.8334, 1.5538, -8.2968),
            c5p: Point3::new(3.0851, 2.3554, -7.1273),
            h5p: Point3::new(3.7433, 1.8119, -6.4494),
            h5pp: Point3::new(3.5796, 3.2812, -7.4213),
            c4p: Point3::new(1.7911, 2.6793, -6.4197),
            h4p: Point3::new(1.3222, 1.7214, -6.1946),
            o4p: Point3::new(1.0323, 3.5445, -7.3018),
            c1p: Point3::new(0.3277, 4.5121, -6.4833),
            h1p: Point3::new(-0.7534, 4.4318, -6.5961),
            c2p: Point3::new(0.6511, 4.2448, -5.0953),
            h2pp: Point3::new(0.8110, 5.1793, -4.5574),
            o2p: Point3::new(-0.4032, 3.5452, -4.4731),
            h2p: Point3::new(-0.3898, 2.6320, -4.7689),
            c3p: Point3::new(1.9225, 3.4042, -5.0852),
            h3p: Point3::new(2.9329, 3.8117, -5.1204),
            o3p: Point3::new(2.1076, 2.8425, -3.7909),
            n1: Point3::new(-0.1416, 5.8155, -7.0041),
            n3: Point3::new(-1.2687, 6.4582, -4.9761),
            c2: Point3::new(-0.5124, 5.5386, -5.6934),
            c4: Point3::new(-1.6543, 7.6545, -5.5695),
            c5: Point3::new(-1.2836, 7.9313, -6.8802),
            c6: Point3::new(-0.5272, 7.0118, -7.5975),
        },
        BasePayload::Uracil(UracilAtoms {
            o2: Point3::new(-0.1712, 4.4800, -5.1682),
            o4: Point3::new(-2.3236, 8.4682, -4.9348),
            h3: Point3::new(-1.5381, 6.2570, -4.0237),
            h5: Point3::new(-1.5832, 8.8609, -7.3413),
            h6: Point3::new(-0.2392, 7.2269, -8.6159),
        }),
    )
}

fn template_u03() -> NucleotideTemplate {
    NucleotideTemplate::new(
        "U03",
        Transform::from_coefficients(
            0.6855506839169724, -0.4516341002891524, -0.5710051656832706,
            0.7231416949703675, 0.513122285696562, 0.4623544191601501,
            0.08418045364783588, -0.7298850316163112, 0.6783667826818328,
            -7.676034788069531, 4.188345440361541, -1.420495946685198,
        ),
        Transform::from_coefficients(
            0.23443194136266188, 0.13434560743127918, -0.9628047167691138,
            -0.1609563485606889, 0.9820993054750742, 0.09784686016110404,
            0.9587151395106596, 0.13203110220435654, 0.2518592252107501,
            -5.515129608921123, -6.332748321114831, 11.127071253300944,
        ),
        Transform::from_coefficients(
            0.19484166029152947, 0.7801937149182571, -0.5944194601599857,
            -0.7002969722824711, -0.31366830098845455, -0.641245933762562,
            -0.6867465893812974, 0.541211570605309, 0.4852516438056551,
            2.7470173581034203, -10.497411723693006, 8.751589187991431,
        ),
        Transform::from_coefficients(
            -0.39871398772214606, 0.5869339704617971, -0.7046528722091852,
            0.6489621440128831, -0.3623308925138943, -0.6690025859204778,
            -0.647977848103549, -0.7240337275624906, -0.2364315328357433,
            4.524715362525271, -3.6042093697705315, 12.683402393869063,
        ),
        CommonAtoms {
            p: Point3::new(11.4186, 3.6032, 3.5654),
            op1: Point3::new(11.8715, 2.2345, 3.2095),
            op2: Point3::new(12.2187, 4.1840, 4.6734),
            o5p: Point3::new(9.9063, 3.4999, 4.0616),
            c5p: Point3::new(9.5274, 2.5650, 5.0893),
            h5p: Point3::new(9.5486, 1.5530, 4.6850),
            h5pp: Point3::new(10.2387, 2.6234, 5.9132),
            c4p: Point3::new(8.1402, 2.8737, 5.5997),
            h4p: Point3::new(7.8591, 2.0716, 6.2821),
            o4p: Point3::new(7.3246, 3.0227, 4.4101),
            c1p: Point3::new(6.3428, 4.0585, 4.6668),
            h1p: Point3::new(5.3230, 3.6788, 4.6037),
            c2p: Point3::new(6.5518, 4.5496, 6.0150),
            h2pp: Point3::new(6.4175, 5.6308, 6.0498),
            o2p: Point3::new(5.6303, 3.9557, 6.9018),
            h2p: Point3::new(5.8985, 3.0495, 7.0704),
            c3p: Point3::new(7.9930, 4.1756, 6.4099),
            h3p: Point3::new(8.9301, 4.6768, 6.1676),
            o3p: Point3::new(8.2107, 4.5098, 7.7758),
            n1: Point3::new(5.6744, 4.8179, 3.5866),
            n3: Point3::new(4.2102, 6.0345, 5.0605),
            c2: Point3::new(5.2204, 5.0989, 4.8700),
            c4: Point3::new(3.6540, 6.6890, 3.9677),
            c5: Point3::new(4.1080, 6.4080, 2.6843),
            c6: Point3::new(5.1182, 5.4724, 2.4938),
        },
        BasePayload::Uracil(UracilAtoms {
            o2: Point3::new(5.7126, 4.5197, 5.8370),
            o4: Point3::new(2.7601, 7.5169, 4.1363),
            h3: Point3::new(3.8804, 6.2387, 5.9930),
            h5: Point3::new(3.6758, 6.9165, 1.8352),
            h6: Point3::new(5.4709, 5.2541, 1.4966),
        }),
    )
}
