//! Unit tests for rpc-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeSet;

    use crate::{CoreError, RpcDetId, SubDetector};

    fn barrel(ring: i32, station: i32, sector: i32, layer: i32, subsector: i32, roll: i32) -> RpcDetId {
        RpcDetId::new(0, ring, station, sector, layer, subsector, roll).unwrap()
    }

    #[test]
    fn accessors() {
        let id = barrel(-2, 3, 11, 2, 2, 3);
        assert_eq!(id.region(), 0);
        assert_eq!(id.ring(), -2);
        assert_eq!(id.station(), 3);
        assert_eq!(id.sector(), 11);
        assert_eq!(id.layer(), 2);
        assert_eq!(id.subsector(), 2);
        assert_eq!(id.roll(), 3);
        assert_eq!(id.sub_detector(), SubDetector::RpcBarrel);
    }

    #[test]
    fn raw_id_tags_muon_rpc() {
        let raw = barrel(0, 1, 1, 1, 1, 1).raw_id();
        assert_eq!(raw >> 28, 2);
        assert_eq!((raw >> 25) & 0x7, 3);
    }

    #[test]
    fn raw_id_decodes_to_same_fields() {
        let ids = [
            barrel(-2, 1, 1, 1, 1, 1),
            barrel(2, 4, 4, 2, 4, 3),
            barrel(0, 3, 12, 1, 2, 2),
            RpcDetId::new(-1, 3, 4, 6, 1, 6, 3).unwrap(),
            RpcDetId::new(1, 1, 1, 1, 2, 1, 0).unwrap(),
        ];
        for id in ids {
            assert_eq!(RpcDetId::from_raw(id.raw_id()), Ok(id), "{id}");
        }
    }

    #[test]
    fn from_raw_rejects_foreign_detector() {
        assert_eq!(RpcDetId::from_raw(0x1000_0000), Err(CoreError::InvalidRawId(0x1000_0000)));
        // Muon tag but a different sub-detector.
        let raw = (2 << 28) | (1 << 25);
        assert!(RpcDetId::from_raw(raw).is_err());
    }

    #[test]
    fn from_raw_rejects_out_of_range_fields() {
        // Region bits = 3 decodes to region 2.
        let raw = (2u32 << 28) | (3 << 25) | 0b11;
        assert_eq!(RpcDetId::from_raw(raw), Err(CoreError::InvalidRawId(raw)));
    }

    #[test]
    fn new_validates_ranges() {
        assert!(matches!(
            RpcDetId::new(2, 0, 1, 1, 1, 1, 1),
            Err(CoreError::InvalidField { field: "region", value: 2 })
        ));
        assert!(matches!(
            RpcDetId::new(0, 3, 1, 1, 1, 1, 1),
            Err(CoreError::InvalidField { field: "ring", .. })
        ));
        // Endcap rings start at 1.
        assert!(RpcDetId::new(1, 0, 1, 1, 1, 1, 1).is_err());
        assert!(RpcDetId::new(0, 0, 5, 1, 1, 1, 1).is_err());
        assert!(RpcDetId::new(0, 0, 1, 13, 1, 1, 1).is_err());
        assert!(RpcDetId::new(0, 0, 1, 1, 3, 1, 1).is_err());
        assert!(RpcDetId::new(0, 0, 1, 1, 1, 1, 5).is_err());
    }

    #[test]
    fn ordering_follows_raw_id() {
        let a = barrel(0, 1, 1, 1, 1, 1);
        let b = barrel(0, 1, 1, 1, 1, 2);
        assert_eq!(a < b, a.raw_id() < b.raw_id());

        let set: BTreeSet<_> = [b, a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn chamber_id_clears_roll() {
        let id = barrel(1, 2, 5, 1, 1, 3);
        assert_eq!(id.chamber_id().roll(), 0);
        assert_eq!(id.chamber_id().sector(), 5);
    }

    #[test]
    fn display() {
        assert_eq!(barrel(2, 1, 3, 1, 1, 2).to_string(), "Re 0 Ri 2 St 1 Se 3 La 1 Su 1 Ro 2");
    }
}

#[cfg(test)]
mod subdet {
    use crate::SubDetector;

    #[test]
    fn from_region() {
        assert_eq!(SubDetector::from_region(0), SubDetector::RpcBarrel);
        assert_eq!(SubDetector::from_region(-1), SubDetector::RpcEndcap);
        assert_eq!(SubDetector::from_region(1), SubDetector::RpcEndcap);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Barrel".parse::<SubDetector>(), Ok(SubDetector::RpcBarrel));
        assert_eq!(" endcap ".parse::<SubDetector>(), Ok(SubDetector::RpcEndcap));
        assert!("wheel".parse::<SubDetector>().is_err());
        assert_eq!(SubDetector::Other.to_string(), "other");
        assert!(!SubDetector::Other.is_rpc());
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::FRAC_PI_2;

    use crate::{GlobalPoint, Rotation};

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn phi_and_perp() {
        let p = GlobalPoint::new(0.0, 2.0, 5.0);
        assert!((p.phi() - FRAC_PI_2).abs() < 1e-6);
        assert!((p.perp() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_about_z() {
        let r = Rotation::about_z(FRAC_PI_2);
        // Local x points along global y.
        assert!(close(r.multiply_inverse([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]));
        assert!(close(r.multiply_inverse([0.0, 1.0, 0.0]), [-1.0, 0.0, 0.0]));
    }

    #[test]
    fn from_axes_maps_local_axes_to_global() {
        let r = Rotation::from_axes([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]);
        assert!(close(r.multiply_inverse([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]));
        assert!(close(r.multiply_inverse([0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn multiply_inverts_multiply_inverse() {
        let r = Rotation::about_z(0.7);
        let v = [1.5, -2.0, 3.0];
        assert!(close(r.multiply(r.multiply_inverse(v)), v));
    }

    #[test]
    fn distance() {
        let a = GlobalPoint::new(0.0, 0.0, 0.0);
        let b = GlobalPoint::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
