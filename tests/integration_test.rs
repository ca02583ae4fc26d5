//! Integration tests for dotted-quad
//!
//! These tests go through the public crate surface only.

use dotted_quad::{
    get_address_bytes, get_broadcast_address, get_network_address, get_subnet_address, to_bytes,
    to_dotted_quad_notation, NetError,
};

#[test]
fn test_broadcast_from_parsed_mask() {
    let mask = get_subnet_address("192.168.1.10", 24).expect("Failed to build mask");
    assert_eq!(mask, "255.255.255.0");
    assert_eq!(
        get_broadcast_address("192.168.1.10", &mask).expect("Failed broadcast"),
        "192.168.1.255"
    );
}

#[test]
fn test_mask_from_bits_matches_subnet() {
    let bits: Vec<bool> = (0..32).map(|i| i < 24).collect();
    let bytes = to_bytes(&bits).expect("Failed to pack bits");
    assert_eq!(bytes, vec![255, 255, 255, 0]);
    assert_eq!(
        to_dotted_quad_notation(&bytes).unwrap(),
        get_subnet_address("10.0.0.1", 24).unwrap()
    );
}

#[test]
fn test_every_prefix_network_and_broadcast() {
    let address = "172.31.200.77";
    for prefix in 0..=32u8 {
        let mask = get_subnet_address(address, prefix).unwrap();
        let network = get_address_bytes(&get_network_address(address, prefix).unwrap()).unwrap();
        let broadcast =
            get_address_bytes(&get_broadcast_address(address, &mask).unwrap()).unwrap();

        let mask = u32::from_be_bytes(get_address_bytes(&mask).unwrap());
        assert_eq!(mask.count_ones(), prefix as u32, "mask /{prefix}");
        assert_eq!(u32::from_be_bytes(network) | !mask, u32::from_be_bytes(broadcast));
    }
}

#[test]
fn test_errors_propagate() {
    assert!(matches!(
        get_address_bytes("256.1.1.1"),
        Err(NetError::InvalidFormat { .. })
    ));
    assert!(matches!(
        get_address_bytes("1.1.1"),
        Err(NetError::InvalidFormat { .. })
    ));
    assert!(matches!(
        to_dotted_quad_notation(&[1, 2, 3]),
        Err(NetError::InvalidLength { len: 3, .. })
    ));
    assert!(matches!(
        get_broadcast_address("10.0.0.1", "255.255.255"),
        Err(NetError::InvalidFormat { .. })
    ));
}
