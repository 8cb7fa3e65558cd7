use rand::rngs::OsRng;
use rlpx_crypto::{concat_kdf, ecdh_x, encrypt, sign_recoverable, PrivateKey};

fn make_data(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(7) ^ (i >> 3)) as u8)
        .collect()
}

#[divan::bench]
fn bench_ecdh_x(bencher: divan::Bencher) {
    let local = PrivateKey::from_bytes(&[1u8; 32]).unwrap();
    let remote = PrivateKey::from_bytes(&[2u8; 32]).unwrap().public_key();
    bencher.bench(|| ecdh_x(divan::black_box(&remote), divan::black_box(&local)));
}

#[divan::bench(args = [32, 1024, 65536])]
fn bench_concat_kdf(bencher: divan::Bencher, len: usize) {
    let z = [0xABu8; 32];
    bencher
        .counter(divan::counter::BytesCount::new(len))
        .bench(|| concat_kdf(divan::black_box(&z), len).unwrap());
}

#[divan::bench(args = [64, 1024, 65536])]
fn bench_encrypt(bencher: divan::Bencher, size: usize) {
    let remote = PrivateKey::from_bytes(&[2u8; 32]).unwrap().public_key();
    let data = make_data(size);
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| {
            encrypt(
                &mut OsRng,
                divan::black_box(&remote),
                divan::black_box(&data),
                Some(&[0x01, 0x02]),
            )
            .unwrap()
        });
}

#[divan::bench]
fn bench_sign_recoverable(bencher: divan::Bencher) {
    let key = PrivateKey::from_bytes(&[3u8; 32]).unwrap();
    let digest = [0x5Au8; 32];
    bencher.bench(|| sign_recoverable(divan::black_box(&key), divan::black_box(&digest)).unwrap());
}

fn main() {
    divan::main();
}
