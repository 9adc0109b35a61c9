//! ECDSA test vectors.

use crate::{
    CurveParams,
    curves::{NIST_P192, NIST_P224, NIST_P256, NIST_P384, NIST_P521},
};
use hex_literal::hex;

/// ECDSA test vector.
///
/// All fields are big-endian integers. `m` is the message digest already
/// converted to the integer `e`.
#[derive(Debug)]
pub struct TestVector {
    /// Private scalar.
    pub d: &'static [u8],

    /// Public key x-coordinate.
    pub q_x: &'static [u8],

    /// Public key y-coordinate.
    pub q_y: &'static [u8],

    /// Nonce (i.e. ECDSA `k` value).
    pub k: &'static [u8],

    /// Message digest (prehashed).
    pub m: &'static [u8],

    /// Signature `r` component.
    pub r: &'static [u8],

    /// Signature `s` component.
    pub s: &'static [u8],
}

/// Worked examples for each NIST prime curve.
///
/// From `ECDSA_Prime.pdf` in the NIST CSRC "Examples with Intermediate
/// Values" collection, with SHA-1 (P-192), SHA-224, SHA-256, SHA-384 and
/// SHA-512 message digests respectively.
pub const NIST_EXAMPLES: &[(CurveParams, TestVector)] = &[
    (
        NIST_P192,
        TestVector {
            d: &hex!("7891686032fd8057f636b44b1f47cce564d2509923a7465b"),
            q_x: &hex!("fba2aac647884b504eb8cd5a0a1287babcc62163f606a9a2"),
            q_y: &hex!("dae6d4cc05ef4f27d79ee38b71c9c8ef4865d98850d84aa5"),
            k: &hex!("d06cb0a0ef2f708b0744f08aa06b6deedea9c0f80a69d847"),
            m: &hex!("1b376f0b735c615ceeeb31baee654b0a374825db"),
            r: &hex!("f0ecba72b88cde399cc5a18e2a8b7da54d81d04fb9802821"),
            s: &hex!("1e6d3d4ae2b1fab2bd2040f5dabf00f854fa140b6d21e8ed"),
        },
    ),
    (
        NIST_P224,
        TestVector {
            d: &hex!("3f0c488e987c80be0fee521f8d90be6034ec69ae11ca72aa777481e8"),
            q_x: &hex!("e84fb0b8e7000cb657d7973cf6b42ed78b301674276df744af130b3e"),
            q_y: &hex!("4376675c6fc5612c21a0ff2d2a89d2987df7a2bc52183b5982298555"),
            k: &hex!("a548803b79df17c40cde3ff0e36d025143bcbba146ec32908eb84937"),
            m: &hex!("1f1e1cf892926cfccfc5a28feef3d807d23f778008dba4b35f04b2fd"),
            r: &hex!("c3a3f5b82712532004c6f6d1db672f55d931c3409ea1216d0be77380"),
            s: &hex!("c5aa1eae6095dea34c9bd84da3852cca41a8bd9d5548f36dabdf6617"),
        },
    ),
    (
        NIST_P256,
        TestVector {
            d: &hex!("c477f9f65c22cce20657faa5b2d1d8122336f851a508a1ed04e479c34985bf96"),
            q_x: &hex!("b7e08afdfe94bad3f1dc8c734798ba1c62b3a0ad1e9ea2a38201cd0889bc7a19"),
            q_y: &hex!("3603f747959dbf7a4bb226e41928729063adc7ae43529e61b563bbc606cc5e09"),
            k: &hex!("7a1a7e52797fc8caaa435d2a4dace39158504bf204fbe19f14dbb427faee50ae"),
            m: &hex!("a41a41a12a799548211c410c65d8133afde34d28bdd542e4b680cf2899c8a8c4"),
            r: &hex!("2b42f576d07f4165ff65d1f3b1500f81e44c316f1f0b3ef57325b69aca46104f"),
            s: &hex!("dc42c2122d6392cd3e3a993a89502a8198c1886fe69d262c4b329bdb6b63faf1"),
        },
    ),
    (
        NIST_P384,
        TestVector {
            d: &hex!("f92c02ed629e4b48c0584b1c6ce3a3e3b4faae4afc6acb0455e73dfc392e6a0ae393a8565e6b9714d1224b57d83f8a08"),
            q_x: &hex!("3bf701bc9e9d36b4d5f1455343f09126f2564390f2b487365071243c61e6471fb9d2ab74657b82f9086489d9ef0f5cb5"),
            q_y: &hex!("d1a358eafbf952e68d533855ccbdaa6ff75b137a5101443199325583552a6295ffe5382d00cfcda30344a9b5b68db855"),
            k: &hex!("2e44ef1f8c0bea8394e3dda81ec6a7842a459b534701749e2ed95f054f0137680878e0749fc43f85edcae06cc2f43fef"),
            m: &hex!("5aea187d1c4f6e1b35057d20126d836c6adbbc7049ee0299c9529f5e0b3f8b5a7411149d6c30d6cb2b8af70e0a781e89"),
            r: &hex!("30ea514fc0d38d8208756f068113c7cada9f66a3b40ea3b313d040d9b57dd41a332795d02cc7d507fcef9faf01a27088"),
            s: &hex!("cc808e504be414f46c9027bcbf78adf067a43922d6fcaa66c4476875fbb7b94efd1f7d5dbe620bfb821c46d549683ad8"),
        },
    ),
    (
        NIST_P521,
        TestVector {
            d: &hex!("0100085f47b8e1b8b11b7eb33028c0b2888e304bfc98501955b45bba1478dc184eeedf09b86a5f7c21994406072787205e69a63709fe35aa93ba333514b24f961722"),
            q_x: &hex!("0098e91eef9a68452822309c52fab453f5f117c1da8ed796b255e9ab8f6410cca16e59df403a6bdc6ca467a37056b1e54b3005d8ac030decfeb68df18b171885d5c4"),
            q_y: &hex!("0164350c321aecfc1cca1ba4364c9b15656150b4b78d6a48d7d28e7f31985ef17be8554376b72900712c4b83ad668327231526e313f5f092999a4632fd50d946bc2e"),
            k: &hex!("0000c91e2349ef6ca22d2de39dd51819b6aad922d3aecdeab452ba172f7d63e370cecd70575f597c09a174ba76bed05a48e562be0625336d16b8703147a6a231d6bf"),
            m: &hex!("9bf0e1deeda31e00f925b77f7cb6b1ced7368de1dc75bb9f94582c1ca709205d32af90025b02fa132fbebd6cddcd9172c0d66d8e581767a8b6f71de60be1f932"),
            r: &hex!("0140c8edca57108ce3f7e7a240ddd3ad74d81e2de62451fc1d558fdc79269adacd1c2526eeeef32f8c0432a9d56e2b4a8a732891c37c9b96641a9254ccfe5dc3e2ba"),
            s: &hex!("00d72f15229d0096376da6651d9985bfd7c07f8d49583b545db3eab20e0a2c1e8615bd9e298455bdeb6b61378e77af1c54eee2ce37b2c61f5c9a8232951cb988b5b1"),
        },
    ),
];

/// ECDSA/P-192 test vectors.
///
/// Adapted from the FIPS 186-2 ECDSA test vectors
/// (P-192, SHA-1, from `SigGen.txt` in `186-2ecdsatestvectors.zip`)
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
///
/// The `m` field contains the SHA-1 prehash of the message, left padded to
/// the size of the curve order.
pub const P192_TEST_VECTORS: &[TestVector; 15] = &[
    TestVector {
        m: &hex!("000000005c8190e87adb631bb5537f3f5f478888bd002ff5"),
        d: &hex!("0017899949d02b55f9556846411cc9de512c6f16ecdeb1c4"),
        q_x: &hex!("14f69738599689f5706ab71343becc886ef1569a2d1137fe"),
        q_y: &hex!("0cf5a433909e33217fb4df6b9593f71d43fb1c2a5653b763"),
        k: &hex!("0098e9c07e8e6adb97b77d85b0c10a265e11737a89a3e37b"),
        r: &hex!("af1f749e3df6220ff04efd178618a977e0838b1b9dc126e3"),
        s: &hex!("8990a04c6cc0ff26264ecf8f7831381a9dbc6e53cc8cc860"),
    },
    TestVector {
        m: &hex!("00000000005e97fa0177ffff868cdac356508e22cbe730d2"),
        d: &hex!("0064c3a51fb6188170f3cdf12b474a77de4ae0052b84ece8"),
        q_x: &hex!("386afa71afc065019f3d2021ead531ed1d365887122d2d4b"),
        q_y: &hex!("bbfb6e9cdb32c2252015acfb4cfb049b08b4cb279c64928a"),
        k: &hex!("00797552b9abf541c886f93556103b817a46c9aa0e2bc86f"),
        r: &hex!("337be42eebdcedd97678eeaae9d1b231b740a191a293c22a"),
        s: &hex!("9d6766b391e95f649e05442453a85466da29eaa97ddcfc62"),
    },
    TestVector {
        m: &hex!("00000000619c5a0cea316912adbf92a8212bad2187453bc6"),
        d: &hex!("00abd205ef412646907d2e4886b8ffd7d94678bd3818ed54"),
        q_x: &hex!("3b1c19d73b6a4d7a12003530a54ae0f5ba18d75c98a0db95"),
        q_y: &hex!("afb8bd8c94c6e3d5dc050e3641c0fad771557ce97f5f3dba"),
        k: &hex!("00b81567f9e19c4ace373a26337488c1a476b7ee8d8e52bf"),
        r: &hex!("e36d5dbb9560d959814cbd30aa6a405da9652fbd250da9ab"),
        s: &hex!("f2db3d62733f6d08b08ef0682f579ac527950117f39e474b"),
    },
    TestVector {
        m: &hex!("00000000179a36aa602e23665295d895581fe44b138da3dc"),
        d: &hex!("0045624e643545c113e4a1993cfac6f23c6e0486c98e14c9"),
        q_x: &hex!("21933e6e8cdcfff62f36c45e83dece1280a888663a34608f"),
        q_y: &hex!("565890e37fdf563595d24524ef1da9aae246892e75a74234"),
        k: &hex!("008df8209daae53a365bdcc8608f597315d43f587859d96a"),
        r: &hex!("1791e503645e53a8304f2a44715942c6aab315b0086f4147"),
        s: &hex!("366309b7f79b2fd98d6c2f3a8424178b01235041f9869552"),
    },
    TestVector {
        m: &hex!("00000000a35b163e77befe4fc68f61c328e309f41b196004"),
        d: &hex!("00ca3e5b5d69cf028c9ff138b1ee5c28607a6bf9352c6430"),
        q_x: &hex!("4828ad4aff5d87dcca98a341344a462edf277850755c7277"),
        q_y: &hex!("8a1bfc6b7b0424e15454ac198d4d697927f4eaaf9d14d88e"),
        k: &hex!("00964e4a3eac4d2641c2a5c4badd301da54962410a459654"),
        r: &hex!("c438ca66c5d3b19e2bcd26a5c54742435f25ee0e9364b41c"),
        s: &hex!("ff194479695afdcc88645f2a309cb99717beac26794c0658"),
    },
    TestVector {
        m: &hex!("00000000e6890e6692407724d039d4a8d4f957d5554b30fb"),
        d: &hex!("0055ace67df2b17f6e9e1b8928ac856ce8d75f6bbaaaed83"),
        q_x: &hex!("2f5d05cbd620145b41d0a1c656d676ead2fc651b3cf71cc2"),
        q_y: &hex!("88d2386cfb812d02a1fa19578a7cd04b356920a2b2e69839"),
        k: &hex!("006ed729e5c2ec9bac7ddfbfe04ea9444c2c77f71455f623"),
        r: &hex!("cde95d12d650102c535fdc1994fc468308b05e2af7af9c14"),
        s: &hex!("c2606a54e7592214a265270918322ae33d487268b9108cae"),
    },
    TestVector {
        m: &hex!("000000008b7bc5a5967111272dc68ca86e3b72b9a493b8d3"),
        d: &hex!("00d185d51f877d3fcc657d18f30cd14570022d0726c0b188"),
        q_x: &hex!("47e8ec5e1edb1d23c04ebfeefd8cb8bf39cd48c348de3ea7"),
        q_y: &hex!("b1167b3a4e2fbe167bbd7b7b06bf1314d58d9e3976ffa47f"),
        k: &hex!("00124c96b0dd589501ba7d5ddfe9c412cf574be10198899b"),
        r: &hex!("539e285389399c785dfc4f3bfccbc825602f443ae0dca3d1"),
        s: &hex!("ed56e54fbaa0b7c0bc462920314031c7a3e7b2eb701cb9db"),
    },
    TestVector {
        m: &hex!("000000003387cd04272f60f84bf82f27b154324da4abf6ed"),
        d: &hex!("007d6fa0b3dacaf022436777ac53c4437c957947c911faab"),
        q_x: &hex!("a4db1303bf13696e26678286e27c166dd87be98cc8be2844"),
        q_y: &hex!("09b4de84bbfa77e049ace272a12d0dd141d363e74ec12511"),
        k: &hex!("00620f584b08d3199f6841fefa4b920659b267271c9b4034"),
        r: &hex!("6818d44aea421701e3f41600c867fb3d3749eadbf33820fa"),
        s: &hex!("658b228b2edd8569f6940fee1c303626e48181094581987b"),
    },
    TestVector {
        m: &hex!("0000000019c4f2d298c703b56791b3454a2eacb93088b6e0"),
        d: &hex!("00b5bfd09a8d177513c4bd7d1bd9ac5ccb7c00c63b9841b4"),
        q_x: &hex!("270d7bb9bfab54529240426a08508f1ed90dc7914cdf11f3"),
        q_y: &hex!("c91ed7f2eca39f563757c5b518d9c28d4d41e7bdc0c7f53e"),
        k: &hex!("00dbc3fbf7b320e9bb6bae128ae19f2c67b297ceb9bc697f"),
        r: &hex!("db20f09b69ac79e224258800ebe6cc51a2e12536b69396c8"),
        s: &hex!("d31df9544277f4a79676fdc7a51faef73ee2a0d1057ff3a2"),
    },
    TestVector {
        m: &hex!("00000000b552b660da681cb93d739f21c57ef1bf84926f5d"),
        d: &hex!("00958e4bbbdd8709a78441485d6f57dee96cc4d98c38ad4f"),
        q_x: &hex!("6a5723e72f6270160f256ddd403c108503388d4320f7926c"),
        q_y: &hex!("f52b0e0e4c8871443cfc0c231e856f6adc2a7c3318a43578"),
        k: &hex!("0045f392d1910760550b34e64d578905c20fb1cc51b29eef"),
        r: &hex!("6505663a952b741c4583e755496740833d5901fc09433963"),
        s: &hex!("de0411972e27bfb80362b44650e687866cd202a4199d605c"),
    },
    TestVector {
        m: &hex!("00000000b2e39a27756979bd647879a4f22008b2624f8f8d"),
        d: &hex!("004960533b788b3fad017e610f5ddab750b4bf5a5e9d0964"),
        q_x: &hex!("1c0e4fc6d8f4e7605f2bf57541395f5167d41d8bdd5c4f80"),
        q_y: &hex!("775da73226020bad6ec4df5022a8c61aee064372ba535ae7"),
        k: &hex!("00e93a10b115218fcb2f0413784385e1fc4555b1818f3b3c"),
        r: &hex!("bc540a8f5ea81c6144698f5452556f17da76a52636461d70"),
        s: &hex!("2de23f6cc9a45899a9f605dab9f28fddf9e376ea06c92db5"),
    },
    TestVector {
        m: &hex!("0000000081b29a3019476a387455b61fffd83ac83ffcd8d0"),
        d: &hex!("00cf08df71e8343af55fc20ca9d6ae822f9bbdf5ab7d2113"),
        q_x: &hex!("194e8fdd4b6b84f1955d1919387f96facf6feadd8105d8dd"),
        q_y: &hex!("2eb47a2ed3aac4250be37f9e31d7ff87be4043ac1eac401f"),
        k: &hex!("009758de92827113c0d1ece5ad9ab65d9acf18f74b58ecf6"),
        r: &hex!("0bbd331b5cbcaef2b26e27bdc559d31c62d5c9b6b8979603"),
        s: &hex!("c1670a3b435805fa7ab20e6dd8ffa1012e9fb41b1d7d0176"),
    },
    TestVector {
        m: &hex!("00000000e062ee7eb959f9c7f33828b71c04a846b3dfac22"),
        d: &hex!("0027492bdd573a53baafd1575578fdce242e43f2e3537a0b"),
        q_x: &hex!("18b94fc7825bad91b1ca5a69cdf576377ad76965670d3967"),
        q_y: &hex!("0a73253d6df54d5105f0ca2f948d0686706dbd064744f7c3"),
        k: &hex!("00d8966cd03fdb2509193ddeee3b429cab2605e283c98577"),
        r: &hex!("1a813b607c0b4d71e7acdac040eb78b3795e53bc498bae85"),
        s: &hex!("67fc1124c30966473dc6a1f14ae32ec2dd860b3667c61dec"),
    },
    TestVector {
        m: &hex!("000000008d30f57068ecc59b8a3a3897a51cc1cf19b674fe"),
        d: &hex!("00066eb1a5e6a42b53fcc82fcf6a601d023127c7b1c779db"),
        q_x: &hex!("3888a94ef288ebe32b4b9b53bf2d3a85b45976583251f0ec"),
        q_y: &hex!("30156d8e0d212a66c071fb2e7b422ef1784a95dacffd9edb"),
        k: &hex!("008c135723cb6a10cbd3e2cde313aee847477e66c4220f47"),
        r: &hex!("37033150afed029fd8390716eac6500223e72154ccff9fee"),
        s: &hex!("b4e978e8d499cc1be576dea74c0dd74cafe9e794a7563172"),
    },
    TestVector {
        m: &hex!("000000008778cce9e8ad6541b9710e3f7067bc2c9cbc6541"),
        d: &hex!("006dfc40880e0c42d2cebcdee255040d18bb99190981f9a9"),
        q_x: &hex!("b11956a29af6984043973e2de46d53d870e04687cae59728"),
        q_y: &hex!("c915f88aa0fa9822762cc4e60df759d189a10c486b901d5e"),
        k: &hex!("009e03961f041fa811ff88c4948bc0a6d867a7fef5f39453"),
        r: &hex!("c459f7bcea050210e3369ac174ba89c823ca1b0d4c0964f6"),
        s: &hex!("04715cba9ba31c4ed9bf0be07d194e2a709294472cc60bdf"),
    },
];

/// ECDSA/P-224 test vectors.
///
/// Adapted from the FIPS 186-4 ECDSA test vectors
/// (P-224, SHA-224, from `SigGen.txt` in `186-4ecdsatestvectors.zip`)
/// <https://csrc.nist.gov/projects/cryptographic-algorithm-validation-program/digital-signatures>
///
/// The `m` field contains a SHA-224 prehash of the `Msg` field in the
/// original `SigTen.txt`.
pub const P224_TEST_VECTORS: &[TestVector; 15] = &[
    TestVector {
        m: &hex!("07eb2a50bf70eee87467600614a490e7600437d077ec651a27e65e67"),
        d: &hex!("16797b5c0c7ed5461e2ff1b88e6eafa03c0f46bf072000dfc830d615"),
        q_x: &hex!("605495756e6e88f1d07ae5f98787af9b4da8a641d1a9492a12174eab"),
        q_y: &hex!("f5cc733b17decc806ef1df861a42505d0af9ef7c3df3959b8dfc6669"),
        k: &hex!("d9a5a7328117f48b4b8dd8c17dae722e756b3ff64bd29a527137eec0"),
        r: &hex!("2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6"),
        s: &hex!("8d9cc4c8ea93e0fd9d6431b9a1fd99b88f281793396321b11dac41eb"),
    },
    TestVector {
        m: &hex!("bde0fbb390fb05d0b75df5bd0d0a4ea29516125f19830e3b0c93b641"),
        d: &hex!("cf020a1ff36c28511191482ed1e5259c60d383606c581948c3fbe2c5"),
        q_x: &hex!("fa21f85b99d3dc18c6d53351fbcb1e2d029c00fa7d1663a3dd94695e"),
        q_y: &hex!("e9e79578f8988b168edff1a8b34a5ed9598cc20acd1f0aed36715d88"),
        k: &hex!("c780d047454824af98677cf310117e5f9e99627d02414f136aed8e83"),
        r: &hex!("45145f06b566ec9fd0fee1b6c6551a4535c7a3bbfc0fede45f4f5038"),
        s: &hex!("7302dff12545b069cf27df49b26e4781270585463656f2834917c3ca"),
    },
    TestVector {
        m: &hex!("c2c03fe07e10538f6a38d5831b5dda9ce7478b3ed31323d60617dc95"),
        d: &hex!("dde6f173fa9f307d206ce46b4f02851ebce9638a989330249fd30b73"),
        q_x: &hex!("fc21a99b060afb0d9dbf3250ea3c4da10be94ce627a65874d8e4a630"),
        q_y: &hex!("e8373ab7190890326aac4aacca3eba89e15d1086a05434dd033fd3f3"),
        k: &hex!("6629366a156840477df4875cfba4f8faa809e394893e1f5525326d07"),
        r: &hex!("41f8e2b1ae5add7c24da8725a067585a3ad6d5a9ed9580beb226f23a"),
        s: &hex!("a5d71bff02dce997305dd337128046f36714398f4ef6647599712fae"),
    },
    TestVector {
        m: &hex!("5d52747226f37a5afcd94d1b95867c0111bcb34402dad12bee76c1b7"),
        d: &hex!("aeee9071248f077590ac647794b678ad371f8e0f1e14e9fbff49671e"),
        q_x: &hex!("fad0a34991bbf89982ad9cf89337b4bd2565f84d5bdd004289fc1cc3"),
        q_y: &hex!("5d8b6764f28c8163a12855a5c266efeb9388df4994b85a8b4f1bd3bc"),
        k: &hex!("1d35d027cd5a569e25c5768c48ed0c2b127c0f99cb4e52ea094fe689"),
        r: &hex!("2258184ef9f0fa698735379972ce9adf034af76017668bfcdab978de"),
        s: &hex!("866fb8e505dea6c909c2c9143ec869d1bac2282cf12366130ff2146c"),
    },
    TestVector {
        m: &hex!("a1ab56bd011b7e6c7e066f25333d08cf81ac0d9c1abfa09f004ab52f"),
        d: &hex!("29c204b2954e1406a015020f9d6b3d7c00658298feb2d17440b2c1a4"),
        q_x: &hex!("0e0fc15e775a75d45f872e5021b554cc0579da19125e1a49299c7630"),
        q_y: &hex!("cb64fe462d025ae2a1394746bdbf8251f7ca5a1d6bb13e0edf6b7b09"),
        k: &hex!("39547c10bb947d69f6c3af701f2528e011a1e80a6d04cc5a37466c02"),
        r: &hex!("86622c376d326cdf679bcabf8eb034bf49f0c188f3fc3afd0006325d"),
        s: &hex!("26613d3b33c70e635d7a998f254a5b15d2a3642bf321e8cff08f1e84"),
    },
    TestVector {
        m: &hex!("8ef4d8a368fad480bac518d625e97206adcafa87c52aef3d179cbfa9"),
        d: &hex!("8986a97b24be042a1547642f19678de4e281a68f1e794e343dabb131"),
        q_x: &hex!("2c070e68e8478341938f3d5026a1fe01e778cdffbebbdd7a4cd29209"),
        q_y: &hex!("cde21c9c7c6590ba300715a7adac278385a5175b6b4ea749c4b6a681"),
        k: &hex!("509712f9c0f3370f6a09154159975945f0107dd1cee7327c68eaa90b"),
        r: &hex!("57afda5139b180de96373c3d649700682e37efd56ae182335f081013"),
        s: &hex!("eb6cd58650cfb26dfdf21de32fa17464a6efc46830eedc16977342e6"),
    },
    TestVector {
        m: &hex!("28fabbac167f3d6a20c2f5a4bcee527c96be04bdd2c596f09d8fbab7"),
        d: &hex!("d9aa95e14cb34980cfddadddfa92bde1310acaff249f73ff5b09a974"),
        q_x: &hex!("3a0d4b8e5fad1ea1abb8d3fb742cd45cd0b76d136e5bbb33206ad120"),
        q_y: &hex!("c90ac83276b2fa3757b0f226cd7360a313bc96fd8329c76a7306cc7d"),
        k: &hex!("1f1739af68a3cee7c5f09e9e09d6485d9cd64cc4085bc2bc89795aaf"),
        r: &hex!("09bbdd003532d025d7c3204c00747cd52ecdfbc7ce3dde8ffbea23e1"),
        s: &hex!("1e745e80948779a5cc8dc5cb193beebb550ec9c2647f4948bf58ba7d"),
    },
    TestVector {
        m: &hex!("50dd74b5af40978e809cee3eb41195402ebb5056e4437f753f9a9d0d"),
        d: &hex!("380fb6154ad3d2e755a17df1f047f84712d4ec9e47d34d4054ea29a8"),
        q_x: &hex!("4772c27cca3348b1801ae87b01cb564c8cf9b81c23cc74468a907927"),
        q_y: &hex!("de9d253935b09617a1655c42d385bf48504e06fa386f5fa533a21dcb"),
        k: &hex!("14dbdffa326ba2f3d64f79ff966d9ee6c1aba0d51e9a8e59f5686dc1"),
        r: &hex!("ff6d52a09ca4c3b82da0440864d6717e1be0b50b6dcf5e1d74c0ff56"),
        s: &hex!("09490be77bc834c1efaa23410dcbf800e6fae40d62a737214c5a4418"),
    },
    TestVector {
        m: &hex!("9fee01807ab6c43a794abf6dcd6118915252ca7d3a31a1ff96b88a8d"),
        d: &hex!("6b98ec50d6b7f7ebc3a2183ff9388f75e924243827ddded8721186e2"),
        q_x: &hex!("1f249911b125348e6e0a473479105cc4b8cfb4fa32d897810fc69ffe"),
        q_y: &hex!("a17db03b9877d1b6328329061ea67aec5a38a884362e9e5b7d7642dc"),
        k: &hex!("ab3a41fedc77d1f96f3103cc7dce215bf45054a755cf101735fef503"),
        r: &hex!("70ccc0824542e296d17a79320d422f1edcf9253840dafe4427033f40"),
        s: &hex!("e3823699c355b61ab1894be3371765fae2b720405a7ce5e790ca8c00"),
    },
    TestVector {
        m: &hex!("c349032f84384b913bd5d19b9211ddce221d66a45e8a051878254117"),
        d: &hex!("8dda0ef4170bf73077d685e7709f6f747ced08eb4cde98ef06ab7bd7"),
        q_x: &hex!("7df67b960ee7a2cb62b22932457360ab1e046c1ec84b91ae65642003"),
        q_y: &hex!("c764ca9fc1b0cc2233fa57bdcfedaab0131fb7b5f557d6ca57f4afe0"),
        k: &hex!("9ef6ebd178a76402968bc8ec8b257174a04fb5e2d65c1ab34ab039b9"),
        r: &hex!("eef9e8428105704133e0f19636c89e570485e577786df2b09f99602a"),
        s: &hex!("8c01f0162891e4b9536243cb86a6e5c177323cca09777366caf2693c"),
    },
    TestVector {
        m: &hex!("63fe0d82cf5edf972e97316666a0914432e420f80b4f78ceb92afd1d"),
        d: &hex!("3dbe18cd88fa49febfcb60f0369a67b2379a466d906ac46a8b8d522b"),
        q_x: &hex!("b10150fd797eb870d377f1dbfa197f7d0f0ad29965af573ec13cc42a"),
        q_y: &hex!("17b63ccefbe27fb2a1139e5757b1082aeaa564f478c23a8f631eed5c"),
        k: &hex!("385803b262ee2ee875838b3a645a745d2e199ae112ef73a25d68d15f"),
        r: &hex!("1d293b697f297af77872582eb7f543dc250ec79ad453300d264a3b70"),
        s: &hex!("517a91b89c4859fcc10834242e710c5f0fed90ac938aa5ccdb7c66de"),
    },
    TestVector {
        m: &hex!("9b44ee16e576c50c0b6b37ac1437bf8f013a745615012451e54a12f2"),
        d: &hex!("c906b667f38c5135ea96c95722c713dbd125d61156a546f49ddaadc6"),
        q_x: &hex!("3c9b4ef1748a1925578658d3af51995b989ad760790157b25fe09826"),
        q_y: &hex!("55648f4ff4edfb899e9a13bd8d20f5c24b35dc6a6a4e42ed5983b4a0"),
        k: &hex!("b04d78d8ac40fefadb99f389a06d93f6b5b72198c1be02dbff6195f0"),
        r: &hex!("4bdd3c84647bad93dcaffd1b54eb87fc61a5704b19d7e6d756d11ad0"),
        s: &hex!("fdd81e5dca54158514f44ba2330271eff4c618330328451e2d93b9fb"),
    },
    TestVector {
        m: &hex!("3c89c15dee194b3223e7b53a8a5845d4873a12a2f1581d5413359828"),
        d: &hex!("3456745fbd51eac9b8095cd687b112f93d1b58352dbe02c66bb9b0cc"),
        q_x: &hex!("f0acdfbc75a748a4a0ac55281754b5c4a364b7d61c5390b334daae10"),
        q_y: &hex!("86587a6768f235bf523fbfc6e062c7401ac2b0242cfe4e5fb34f4057"),
        k: &hex!("854b20c61bcdf7a89959dbf0985880bb14b628f01c65ef4f6446f1c1"),
        r: &hex!("a2601fbb9fe89f39814735febb349143baa934170ffb91c6448a7823"),
        s: &hex!("bf90f9305616020a0e34ef30803fc15fa97dffc0948452bbf6cb5f66"),
    },
    TestVector {
        m: &hex!("2b7faf36fdf0e393ddeb9fc875dd99f670e3d538fd0462395ea06c8f"),
        d: &hex!("2c522af64baaca7b7a08044312f5e265ec6e09b2272f462cc705e4c3"),
        q_x: &hex!("5fad3c047074b5de1960247d0cc216b4e3fb7f3b9cd960575c8479fc"),
        q_y: &hex!("e4fc9c7f05ff0b040eb171fdd2a1dfe2572c564c2003a08c3179a422"),
        k: &hex!("9267763383f8db55eed5b1ca8f4937dc2e0ca6175066dc3d4a4586af"),
        r: &hex!("422e2e9fe535eb62f11f5f8ce87cf2e9ec65e61c06737cf6a0019ae6"),
        s: &hex!("116cfcf0965b7bc63aecade71d189d7e98a0434b124f2afbe3ccf0a9"),
    },
    TestVector {
        m: &hex!("5b24b6157c0d1edf3a40c22a0745d23bdb59379e5e5e776ed040288d"),
        d: &hex!("3eff7d07edda14e8beba397accfee060dbe2a41587a703bbe0a0b912"),
        q_x: &hex!("6dd84f4d66f362844e41a7913c40b4aad5fa9ba56bb44c2d2ed9efac"),
        q_y: &hex!("15f65ebcdf2fd9f8035385a330bdabec0f1cd9cc7bc31d2fadbe7cda"),
        k: &hex!("7bb48839d7717bab1fdde89bf4f7b4509d1c2c12510925e13655dead"),
        r: &hex!("127051d85326049115f307af2bc426f6c2d08f4774a0b496fb6982b1"),
        s: &hex!("6857e84418c1d1179333b4e5307e92abade0b74f7521ad78044bf597"),
    },
];

/// ECDSA/secp256k1 test vectors.
///
/// The signature is in the "low S" normalized form.
pub const SECP256K1_TEST_VECTORS: &[TestVector; 1] = &[
    TestVector {
        d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
        q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
        q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
        k: &hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
        m: &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
        r: &hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
        s: &hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
    },
];
