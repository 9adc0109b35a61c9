//! Group law test vectors.
//!
//! Generated independently of this crate: `ADD` vectors are the affine
//! coordinates of `G, 2G, 3G, ...`, and `MUL` vectors are `(k, k·G)` for
//! assorted scalars, including `n - 1`.

use hex_literal::hex;

/// Repeated addition of the secp256k1 generator: `G`, `2G`, ... `10G`.
pub const SECP256K1_ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    ),
    (
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    ),
    (
        hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    ),
    (
        hex!("e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13"),
        hex!("51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922"),
    ),
    (
        hex!("2f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4"),
        hex!("d8ac222636e5e3d6d4dba9dda6c9c426f788271bab0d6840dca87d3aa6ac62d6"),
    ),
    (
        hex!("fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"),
        hex!("ae12777aacfbb620f3be96017f45c560de80f0f6518fe4a03c870c36b075f297"),
    ),
    (
        hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
        hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
    ),
    (
        hex!("2f01e5e15cca351daff3843fb70f3c2f0a1bdd05e5af888a67784ef3e10a2a01"),
        hex!("5c4da8a741539949293d082a132d13b4c2e213d6ba5b7617b5da2cb76cbde904"),
    ),
    (
        hex!("acd484e2f0c7f65309ad178a9f559abde09796974c57e714c35f110dfc27ccbe"),
        hex!("cc338921b0a7d9fd64380971763b61e9add888a4375f8e0f05cc262ac64f9c37"),
    ),
    (
        hex!("a0434d9e47f3c86235477c7b1ae6ae5d3442d49b1943c2b752a68e2a47e247c7"),
        hex!("893aba425419bc27a3b6c7e693a24c696f794c2ed877a1593cbee53b037368d7"),
    ),
];

/// Scalar multiplication of the secp256k1 generator: `(k, x, y)` with
/// `(x, y) = k·G`.
pub const SECP256K1_MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("e8a2eb1baef50366e85bccb4beaca130e5817f027b625ea459cdfb8d1ff9167f"),
        hex!("a02c4eb09ad5966269884ec7c3a549af02b78f99dc744a8ef2d9a04b290c872b"),
        hex!("5d4be35395943177eb12e7fa99162ddff4a03bfe4efeee9bd5fd743fac498c21"),
    ),
    (
        hex!("b82d477fdc5d2c958a026d845c90897e72e3e36523bc0617cb4ff1827b94ed84"),
        hex!("3994d333ff4d255ed599f05234d3f6fc742dfe8b5c910dcfd96ee3462898294a"),
        hex!("6d7412e0d5a5ec7863280dd1788dac4fe647bd9ec92bef3d03742b219ee2b30f"),
    ),
    (
        hex!("201da0093f88ffedfc1e8f0cb58c139b5a10910f4755d3a0505f3f31182ed1ef"),
        hex!("e383e655ed9ae5e77169b3f84b6ef50a9a0c5d0a11271f2d87c419542a6d9683"),
        hex!("cf023426aa2c81132e0d3ff93063bfad82a885040388ab133382b8872e1cf784"),
    ),
    (
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    ),
];

/// Repeated addition of the P-256 generator: `G`, `2G`, ... `10G`.
pub const NIST_P256_ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
    (
        hex!("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
        hex!("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
    ),
    (
        hex!("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
        hex!("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
    ),
    (
        hex!("e2534a3532d08fbba02dde659ee62bd0031fe2db785596ef509302446b030852"),
        hex!("e0f1575a4c633cc719dfee5fda862d764efc96c3f30ee0055c42c23f184ed8c6"),
    ),
    (
        hex!("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
        hex!("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
    ),
    (
        hex!("b01a172a76a4602c92d3242cb897dde3024c740debb215b4c6b0aae93c2291a9"),
        hex!("e85c10743237dad56fec0e2dfba703791c00f7701c7e16bdfd7c48538fc77fe2"),
    ),
    (
        hex!("8e533b6fa0bf7b4625bb30667c01fb607ef9f8b8a80fef5b300628703187b2a3"),
        hex!("73eb1dbde03318366d069f83a6f5900053c73633cb041b21c55e1a86c1f400b4"),
    ),
    (
        hex!("62d9779dbee9b0534042742d3ab54cadc1d238980fce97dbb4dd9dc1db6fb393"),
        hex!("ad5accbd91e9d8244ff15d771167cee0a2ed51f6bbe76a78da540a6a0f09957e"),
    ),
    (
        hex!("ea68d7b6fedf0b71878938d51d71f8729e0acb8c2c6df8b3d79e8a4b90949ee0"),
        hex!("2a2744c972c9fce787014a964a8ea0c84d714feaa4de823fe85a224a4dd048fa"),
    ),
    (
        hex!("cef66d6b2a3a993e591214d1ea223fb545ca6c471c48306e4c36069404c5723f"),
        hex!("878662a229aaae906e123cdd9d3b4c10590ded29fe751eeeca34bbaa44af0773"),
    ),
];

/// Scalar multiplication of the P-256 generator: `(k, x, y)` with
/// `(x, y) = k·G`.
pub const NIST_P256_MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("65709ab0c9a7c0631beff9df7d72418b4c2765f6d2a1b0bb3ab864107f0af97b"),
        hex!("eaf078045dc6969ea148d96c7cd86500324e252e9f588a7d41ad002a97a231a0"),
        hex!("62be103a00b36e0343f17fc3bee82f0193112c9fb2cc643d85780eda5ce060f4"),
    ),
    (
        hex!("3864d4ab67b8a60837bbb923f03cb0e6f270e00643477c960fa048cdc146508a"),
        hex!("09fa1db8dae73ad12d574ef6870e8fe2dd9a413efc7b7ac20c5eaf7eb088d539"),
        hex!("69ac3b4658257888299059d9878ebc64126235f96d150c57577b2c59b55f71eb"),
    ),
    (
        hex!("3759e161a2c1dae181f0271b45924000437b7fd1711e06fda979c19170a1ced7"),
        hex!("713ba829a08c17e52d0186c9a54c53c2909319e12db3c7d4963a200bedfbc62f"),
        hex!("391cd6e7cff3406df876a12156045bc45fe7caeef776ebbca9f066c23b8a30fe"),
    ),
    (
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550"),
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex!("b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a"),
    ),
];

/// Repeated addition of the P-384 generator: `G`, `2G`, ... `10G`.
pub const NIST_P384_ADD_TEST_VECTORS: &[([u8; 48], [u8; 48])] = &[
    (
        hex!("aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"),
        hex!("3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"),
    ),
    (
        hex!("08d999057ba3d2d969260045c55b97f089025959a6f434d651d207d19fb96e9e4fe0e86ebe0e64f85b96a9c75295df61"),
        hex!("8e80f1fa5b1b3cedb7bfe8dffd6dba74b275d875bc6cc43e904e505f256ab4255ffd43e94d39e22d61501e700a940e80"),
    ),
    (
        hex!("077a41d4606ffa1464793c7e5fdc7d98cb9d3910202dcd06bea4f240d3566da6b408bbae5026580d02d7e5c70500c831"),
        hex!("c995f7ca0b0c42837d0bbe9602a9fc998520b41c85115aa5f7684c0edc111eacc24abd6be4b5d298b65f28600a2f1df1"),
    ),
    (
        hex!("138251cd52ac9298c1c8aad977321deb97e709bd0b4ca0aca55dc8ad51dcfc9d1589a1597e3a5120e1efd631c63e1835"),
        hex!("cacae29869a62e1631e8a28181ab56616dc45d918abc09f3ab0e63cf792aa4dced7387be37bba569549f1c02b270ed67"),
    ),
    (
        hex!("11de24a2c251c777573cac5ea025e467f208e51dbff98fc54f6661cbe56583b037882f4a1ca297e60abcdbc3836d84bc"),
        hex!("8fa696c77440f92d0f5837e90a00e7c5284b447754d5dee88c986533b6901aeb3177686d0ae8fb33184414abe6c1713a"),
    ),
    (
        hex!("627be1acd064d2b2226fe0d26f2d15d3c33ebcbb7f0f5da51cbd41f26257383021317d7202ff30e50937f0854e35c5df"),
        hex!("09766a4cb3f8b1c21be6dda6c14f1575b2c95352644f774c99864f613715441604c45b8d84e165311733a408d3f0f934"),
    ),
    (
        hex!("283c1d7365ce4788f29f8ebf234edffead6fe997fbea5ffa2d58cc9dfa7b1c508b05526f55b9ebb2040f05b48fb6d0e1"),
        hex!("9475c99061e41b88ba52efdb8c1690471a61d867ed799729d9c92cd01dbd225630d84ede32a78f9e64664cdac512ef8c"),
    ),
    (
        hex!("1692778ea596e0be75114297a6fa383445bf227fbe58190a900c3c73256f11fb5a3258d6f403d5ece6e9b269d822c87d"),
        hex!("dcd2365700d4106a835388ba3db8fd0e22554adc6d521cd4bd1c30c2ec0eec196bade1e9cdd1708d6f6abfa4022b0ad2"),
    ),
    (
        hex!("8f0a39a4049bcb3ef1bf29b8b025b78f2216f7291e6fd3bac6cb1ee285fb6e21c388528bfee2b9535c55e4461079118b"),
        hex!("62c77e1438b601d6452c4a5322c3a9799a9b3d7ca3c400c6b7678854aed9b3029e743efedfd51b68262da4f9ac664af8"),
    ),
    (
        hex!("a669c5563bd67eec678d29d6ef4fde864f372d90b79b9e88931d5c29291238cced8e85ab507bf91aa9cb2d13186658fb"),
        hex!("a988b72ae7c1279f22d9083db5f0ecddf70119550c183c31c502df78c3b705a8296d8195248288d997784f6ab73a21dd"),
    ),
];

/// Scalar multiplication of the P-384 generator: `(k, x, y)` with
/// `(x, y) = k·G`.
pub const NIST_P384_MUL_TEST_VECTORS: &[([u8; 48], [u8; 48], [u8; 48])] = &[
    (
        hex!("f5cbad9da055374f9b392816bd31b99db951cddd47294547d6d111c1fe1126435167de3efb5e558fd1eb705fe64d80f2"),
        hex!("e781ce08427fbe92c2ba4459aee227bdb2499a1cfee51e618330a027b1c70c06d7df21c15637e846ef9e9e9a3b2dd1a0"),
        hex!("03b7c4aaeea9f43f36b238e4448f600939cd82235b6125b001f86303706da2351fff49d713668feb0c34b26019608a67"),
    ),
    (
        hex!("300c552fec1277577e1b9fffc20e677a01fa728c56d45edb3c22e257558c63872599f8d9ed5e7cee7d7cca6efd429a6c"),
        hex!("bf25bcec3c496889fdae408d6e304465415b6d19f1b7a3946b13048c7f746b48ffaf76f6af91a22c477037bedbeb8a85"),
        hex!("f19fb46f3830a7182120682c797d3ed039b849991e7d5f86e87051b2588593a979ee9423da36f28551832754142655f8"),
    ),
    (
        hex!("e8a841dde3de6316dd3c267c5717d0a1348be6f5604cfd0a5c71b4463606d4100dd81f7fec1825c99dff3f9ea9eb1619"),
        hex!("41e8016aa161e132eff6afa3356c33024f2527deba5023163a2e4b881d7d30cf391592773328ed0786d7f9fccc8955cf"),
        hex!("34d72ebafcb8bde8bb12cb9d7ca0925645cbc7f4db9601617c46fa57a96bc04d7d59251bb86287414eb522e7e9407934"),
    ),
    (
        hex!("ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52972"),
        hex!("aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7"),
        hex!("c9e821b569d9d390a26167406d6d23d6070be242d765eb831625ceec4a0f473ef59f4e30e2817e6285bce2846f15f1a0"),
    ),
];
