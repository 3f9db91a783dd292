use base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 2, 3], vec![0u8; 12]).unwrap();
    assert_eq!(tensor.len(), 12);
    assert!(!tensor.is_empty());
}

#[test]
fn test_tensor_shape_mismatch() {
    let result = Tensor::new(vec![2, 2], vec![1u8, 2, 3]);
    assert_eq!(
        result,
        Err(TensorError::ShapeMismatch {
            expected: 4,
            got: 3
        })
    );
}

#[test]
fn test_tensor_shape_overflow() {
    let result = Tensor::<u8>::new(vec![usize::MAX, 2], Vec::new());
    assert_eq!(result, Err(TensorError::ShapeOverflow));
}
